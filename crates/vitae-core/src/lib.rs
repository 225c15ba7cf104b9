//! Vitae Core Library
//!
//! Portfolio document schema, site configuration, and error handling for the
//! Vitae portfolio site generator.

pub mod config;
pub mod error;
pub mod portfolio;
pub mod validation;

pub use config::Config;
pub use error::{CoreError, Result};
pub use portfolio::{
    Achievement, Education, Experience, Personal, Portfolio, PortfolioSource, Project, Skills,
    Social, load_portfolio_data, non_blank,
};
pub use validation::{Finding, lint_portfolio};
