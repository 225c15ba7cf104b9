//! Check command - validate configuration and the portfolio document

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use vitae_core::{PortfolioSource, lint_portfolio};
use vitae_generator::sections::skills::has_dedicated_style;

use super::Site;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Errors always fail the check; warnings fail it only in strict mode.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and portfolio data");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let site = match Site::load(config_path) {
        Ok(site) => {
            println!("  ✓ Configuration valid");
            Some(site)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e:#}"));
            println!("  ✗ Configuration invalid");
            None
        }
    };

    if let Some(site) = &site {
        println!("\nChecking configuration values...");
        check_config_values(site, &mut result);

        println!("\nChecking portfolio data...");
        check_portfolio(site, &mut result);
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

fn check_config_values(site: &Site, result: &mut ValidationResult) {
    let config = &site.config;

    if !config.site.base_url.starts_with("http") {
        result.add_warning("site.base_url should start with http:// or https://");
    }

    if config.site.base_url.ends_with('/') {
        result.add_warning("site.base_url should not have a trailing slash");
    }

    let output = site.output_dir();
    if output.exists() && !output.is_dir() {
        result.add_error(format!(
            "Output path exists but is not a directory: {}",
            output.display()
        ));
    }

    let static_dir = site.static_dir();
    if static_dir.is_dir() {
        println!("  ✓ {} exists", static_dir.display());
    } else {
        println!("  ℹ No static directory at {}", static_dir.display());
    }

    println!("  ✓ Configuration values checked");
}

fn check_portfolio(site: &Site, result: &mut ValidationResult) {
    let data_path = site.data_path();
    let portfolio = match PortfolioSource::file(&data_path).load() {
        Ok(p) => {
            println!("  ✓ {} valid", data_path.display());
            p
        }
        Err(e) => {
            result.add_error(e.to_string());
            println!("  ✗ {} invalid", data_path.display());
            return;
        }
    };

    for finding in lint_portfolio(&portfolio) {
        result.add_warning(finding.to_string());
    }

    for category in portfolio.skills.keys() {
        if !has_dedicated_style(category) {
            result.add_warning(format!(
                "skills.{category}: no dedicated style, the default icon will be used"
            ));
        }
    }

    println!(
        "  ℹ {} skill categories, {} projects, {} roles, {} education, {} achievements",
        portfolio.skills.len(),
        portfolio.projects.len(),
        portfolio.experience.len(),
        portfolio.education.len(),
        portfolio.achievements.len(),
    );
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn scaffold() -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("site");
        crate::cmd::new::run(&root).unwrap();
        (dir, root)
    }

    #[test]
    fn test_scaffold_passes_strict() {
        let (_dir, root) = scaffold();
        run(&root.join("config.toml"), true).unwrap();
    }

    #[test]
    fn test_unknown_category_fails_only_in_strict_mode() {
        let (_dir, root) = scaffold();
        let data = root.join("data/portfolio.json");
        let mut doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&data).unwrap()).unwrap();
        doc["skills"]["Soft Skills"] = serde_json::json!(["Mentoring"]);
        fs::write(&data, doc.to_string()).unwrap();

        let config = root.join("config.toml");
        run(&config, false).unwrap();
        assert!(run(&config, true).is_err());
    }

    #[test]
    fn test_malformed_document_fails() {
        let (_dir, root) = scaffold();
        fs::write(root.join("data/portfolio.json"), r#"{"personal": 1}"#).unwrap();

        assert!(run(&root.join("config.toml"), false).is_err());
    }
}
