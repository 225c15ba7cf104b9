//! New command - scaffold a portfolio site

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr, bail};
use vitae_core::portfolio::SAMPLE_PORTFOLIO_JSON;

const CONFIG_TEMPLATE: &str = r#"[site]
# title = "Alex Morgan | Full Stack Software Engineer"
base_url = "http://localhost:3000"
description = "Portfolio of Alex Morgan"
language = "en"

[build]
output_dir = "public"
data_file = "data/portfolio.json"
static_dir = "static"
fingerprint = false

[projects]
tech_stack_limit = 4
feature_limit = 3

[robots]
enabled = true
disallow = []
allow = []
"#;

/// Run the new command.
///
/// Writes `config.toml`, a sample `data/portfolio.json` and an empty
/// `static/` directory under `path`. Existing files are never overwritten.
pub fn run(path: &Path) -> Result<()> {
    tracing::info!(?path, "Scaffolding new site");

    let files = [
        (path.join("config.toml"), CONFIG_TEMPLATE),
        (path.join("data/portfolio.json"), SAMPLE_PORTFOLIO_JSON),
    ];

    for (file, _) in &files {
        if file.exists() {
            bail!("Refusing to overwrite existing file: {}", file.display());
        }
    }

    for (file, content) in &files {
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).wrap_err("Failed to create directories")?;
        }
        fs::write(file, content)
            .wrap_err_with(|| format!("Failed to write {}", file.display()))?;
        println!("Created: {}", file.display());
    }

    let static_dir = path.join("static");
    fs::create_dir_all(&static_dir).wrap_err("Failed to create static directory")?;
    println!("Created: {}/", static_dir.display());

    tracing::info!(?path, "Site scaffolded");
    println!();
    println!("Next steps:");
    println!("  1. Edit {} with your details", path.join("data/portfolio.json").display());
    println!("  2. vitae --config {} watch", path.join("config.toml").display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use vitae_core::{Config, load_portfolio_data};

    use super::*;

    #[test]
    fn test_scaffold_layout() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("me");
        run(&root).unwrap();

        let config = Config::load(&root.join("config.toml")).unwrap();
        assert_eq!(config.build.data_file, "data/portfolio.json");
        assert!(load_portfolio_data(&root.join("data/portfolio.json")).is_ok());
        assert!(root.join("static").is_dir());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "mine").unwrap();

        assert!(run(dir.path()).is_err());
        assert_eq!(
            fs::read_to_string(dir.path().join("config.toml")).unwrap(),
            "mine"
        );
        assert!(!dir.path().join("data").exists());
    }
}
