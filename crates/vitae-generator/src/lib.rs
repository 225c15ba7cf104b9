//! Vitae Generator Library
//!
//! Renders a portfolio document into a static site.
//!
//! # Modules
//!
//! - [`template`] - HTML template system with variable interpolation
//! - [`sections`] - One renderer per page section
//! - [`html`] - Page assembly
//! - [`sitemap`] - XML sitemap generation
//! - [`robots`] - robots.txt generation
//! - [`assets`] - Static asset processing with optional fingerprinting
//! - [`build`] - Build orchestration

pub mod assets;
pub mod build;
pub mod html;
pub mod robots;
pub mod sections;
pub mod sitemap;
pub mod template;

pub use assets::{AssetManifest, AssetProcessor};
pub use build::{BuildError, BuildStats, Builder};
pub use html::HtmlGenerator;
pub use robots::RobotsGenerator;
pub use sitemap::SitemapGenerator;
pub use template::{Template, TemplateContext, TemplateRegistry};
