//! Site configuration management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Number of tech-stack tags shown on a project card before the overflow marker.
pub const DEFAULT_TECH_STACK_LIMIT: usize = 4;

/// Number of feature bullets shown on a project card before the overflow marker.
pub const DEFAULT_FEATURE_LIMIT: usize = 3;

/// Main configuration structure for Vitae.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,

    /// Projects section settings.
    #[serde(default)]
    pub projects: ProjectsConfig,

    /// Robots.txt settings.
    #[serde(default)]
    pub robots: RobotsConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Page title. Falls back to "{name} | {title}" from the document.
    #[serde(default)]
    pub title: Option<String>,

    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,

    /// Site description for meta tags. Falls back to the bio.
    #[serde(default)]
    pub description: Option<String>,

    /// Language code for the `<html lang>` attribute.
    #[serde(default = "default_language")]
    pub language: String,
}

/// Build configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Path of the portfolio document.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Directory of static files copied verbatim to the output.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Whether to fingerprint css/js/image assets.
    #[serde(default)]
    pub fingerprint: bool,
}

/// Projects section configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsConfig {
    /// Tags shown before the "+N more" marker.
    #[serde(default = "default_tech_stack_limit")]
    pub tech_stack_limit: usize,

    /// Feature bullets shown before the "+N more" marker.
    #[serde(default = "default_feature_limit")]
    pub feature_limit: usize,
}

/// Robots.txt configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotsConfig {
    /// Whether robots.txt is written.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Paths crawlers may not visit.
    #[serde(default)]
    pub disallow: Vec<String>,

    /// Paths explicitly allowed.
    #[serde(default)]
    pub allow: Vec<String>,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

fn default_data_file() -> String {
    "data/portfolio.json".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_tech_stack_limit() -> usize {
    DEFAULT_TECH_STACK_LIMIT
}

fn default_feature_limit() -> usize {
    DEFAULT_FEATURE_LIMIT
}

fn default_true() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: None,
            base_url: "http://localhost:3000".to_string(),
            description: None,
            language: default_language(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            data_file: default_data_file(),
            static_dir: default_static_dir(),
            fingerprint: false,
        }
    }
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            tech_stack_limit: DEFAULT_TECH_STACK_LIMIT,
            feature_limit: DEFAULT_FEATURE_LIMIT,
        }
    }
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            disallow: Vec::new(),
            allow: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| match e {
            CoreError::Toml(source) => CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                source,
            ),
            other => other,
        })?;

        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, letting `VITAE__SECTION__KEY` variables override the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("VITAE").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CoreError::config("site.title cannot be empty when set"));
        }

        if self.build.data_file.is_empty() {
            return Err(CoreError::config("build.data_file cannot be empty"));
        }

        if self.projects.tech_stack_limit == 0 || self.projects.feature_limit == 0 {
            return Err(CoreError::config(
                "projects.tech_stack_limit and projects.feature_limit must be at least 1",
            ));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Resolve the data file relative to the directory holding the config file.
    #[must_use]
    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.build.data_file)
    }

    /// Resolve the static directory relative to the directory holding the config file.
    #[must_use]
    pub fn static_path(&self, root: &Path) -> PathBuf {
        root.join(&self.build.static_dir)
    }
}
