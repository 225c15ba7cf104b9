//! Robots.txt generation.

use std::{fs, path::Path};

use thiserror::Error;
use tracing::info;
use vitae_core::Config;

/// Robots generation errors.
#[derive(Debug, Error)]
pub enum RobotsError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for robots generation.
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Robots.txt generator.
#[derive(Debug)]
pub struct RobotsGenerator {
    config: Config,
}

impl RobotsGenerator {
    /// Create a new robots generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render robots.txt, pointing crawlers at the sitemap.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("User-agent: *\n");

        for path in &self.config.robots.disallow {
            out.push_str(&format!("Disallow: {path}\n"));
        }
        for path in &self.config.robots.allow {
            out.push_str(&format!("Allow: {path}\n"));
        }
        if self.config.robots.disallow.is_empty() && self.config.robots.allow.is_empty() {
            out.push_str("Allow: /\n");
        }

        out.push_str(&format!(
            "\nSitemap: {}\n",
            self.config.url_for("sitemap.xml")
        ));
        out
    }

    /// Write robots.txt into `output_dir`. Returns whether a file was written.
    pub fn generate(&self, output_dir: &Path) -> Result<bool> {
        if !self.config.robots.enabled {
            return Ok(false);
        }

        info!("generating robots.txt");
        fs::write(output_dir.join("robots.txt"), self.render())?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn config() -> Config {
        let mut config = Config::default();
        config.site.base_url = "https://example.com".to_string();
        config
    }

    #[test]
    fn test_default_allows_everything() {
        let robots = RobotsGenerator::new(config()).render();

        assert!(robots.starts_with("User-agent: *\nAllow: /\n"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn test_rules_from_config() {
        let mut config = config();
        config.robots.disallow = vec!["/drafts/".to_string()];
        let robots = RobotsGenerator::new(config).render();

        assert!(robots.contains("Disallow: /drafts/\n"));
        assert!(!robots.contains("Allow: /\n"));
    }

    #[test]
    fn test_disabled_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut config = config();
        config.robots.enabled = false;

        assert!(!RobotsGenerator::new(config).generate(dir.path()).unwrap());
        assert!(!dir.path().join("robots.txt").exists());
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = TempDir::new().unwrap();
        assert!(RobotsGenerator::new(config()).generate(dir.path()).unwrap());

        let content = std::fs::read_to_string(dir.path().join("robots.txt")).unwrap();
        assert!(content.starts_with("User-agent: *"));
    }
}
