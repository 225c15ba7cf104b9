//! Vitae CLI Library
//!
//! Command implementations and the development server behind the `vitae`
//! binary.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check, new, watch)
//! - [`server`] - Embedded development server with live reload
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use vitae::cmd;
//!
//! // Build the site described by ./config.toml
//! cmd::build::run(Path::new("config.toml"), None, None).unwrap();
//! ```

pub mod cmd;
pub mod server;

pub use vitae_core::{Config, Portfolio};
pub use vitae_generator::{BuildStats, Builder};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// vitae::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
