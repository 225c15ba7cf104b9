//! Vitae CLI
//!
//! Single binary generator for personal portfolio sites.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Vitae.
#[derive(Parser)]
#[command(
    name = "vitae",
    version,
    about = "Render a JSON portfolio document into a static personal site"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Build the site for production
    Build {
        /// Output directory (defaults to build.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override site base URL (e.g., https://example.com)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Validate configuration and portfolio data
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Scaffold a new site with a sample portfolio
    New {
        /// Directory to create the site in
        path: PathBuf,
    },
    /// Start development server with live reload
    Watch {
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Open browser automatically
        #[arg(long)]
        open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    vitae::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { output, base_url } => {
            vitae::cmd::build::run(&cli.config, output.as_deref(), base_url.as_deref())?;
        }
        Commands::Check { strict } => {
            vitae::cmd::check::run(&cli.config, strict)?;
        }
        Commands::New { path } => {
            vitae::cmd::new::run(&path)?;
        }
        Commands::Watch { port, open } => {
            vitae::cmd::watch::run(&cli.config, port, open).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_build_command_parsing() {
        let cli = Cli::parse_from(["vitae", "build", "--output", "dist"]);

        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Build { output, base_url } => {
                assert_eq!(output, Some(PathBuf::from("dist")));
                assert!(base_url.is_none());
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_defaults() {
        let cli = Cli::parse_from(["vitae", "build"]);

        match cli.command {
            Commands::Build { output, base_url } => {
                assert!(output.is_none());
                assert!(base_url.is_none());
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_build_with_base_url() {
        let cli = Cli::parse_from(["vitae", "build", "--base-url", "https://example.com"]);

        match cli.command {
            Commands::Build { base_url, .. } => {
                assert_eq!(base_url.as_deref(), Some("https://example.com"));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_cli_watch_command_parsing() {
        let cli = Cli::parse_from(["vitae", "watch", "--port", "8080", "--open"]);

        match cli.command {
            Commands::Watch { port, open } => {
                assert_eq!(port, 8080);
                assert!(open);
            }
            _ => panic!("Expected Watch command"),
        }
    }

    #[test]
    fn test_cli_new_command_parsing() {
        let cli = Cli::parse_from(["vitae", "new", "my-site"]);

        match cli.command {
            Commands::New { path } => assert_eq!(path, PathBuf::from("my-site")),
            _ => panic!("Expected New command"),
        }
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let cli = Cli::parse_from(["vitae", "check", "--strict"]);

        match cli.command {
            Commands::Check { strict } => assert!(strict),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let cli = Cli::parse_from(["vitae", "-vvv", "build"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let cli = Cli::parse_from(["vitae", "--config", "site.toml", "check"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }
}
