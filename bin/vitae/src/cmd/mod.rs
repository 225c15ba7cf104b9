//! CLI command implementations.

pub mod build;
pub mod check;
pub mod new;
pub mod watch;

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use vitae_core::Config;

/// A loaded configuration plus the paths it resolves to.
///
/// Relative paths in `config.toml` are resolved against the directory that
/// holds the file, so commands work from any working directory.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: Config,
    pub root: PathBuf,
}

impl Site {
    /// Load `config_path`, layering `VITAE__*` environment overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        let config = Config::load_with_env(config_path)
            .wrap_err_with(|| format!("Failed to load configuration from {}", config_path.display()))?;
        Ok(Self::new(config, config_path))
    }

    #[must_use]
    pub fn new(config: Config, config_path: &Path) -> Self {
        let root = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self { config, root }
    }

    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.config.data_path(&self.root)
    }

    #[must_use]
    pub fn static_dir(&self) -> PathBuf {
        self.config.static_path(&self.root)
    }

    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.build.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_against_config_dir() {
        let site = Site::new(Config::default(), Path::new("sites/me/config.toml"));

        assert_eq!(site.root, PathBuf::from("sites/me"));
        assert_eq!(site.data_path(), PathBuf::from("sites/me/data/portfolio.json"));
        assert_eq!(site.static_dir(), PathBuf::from("sites/me/static"));
        assert_eq!(site.output_dir(), PathBuf::from("sites/me/public"));
    }

    #[test]
    fn test_bare_config_name_uses_current_dir() {
        let site = Site::new(Config::default(), Path::new("config.toml"));
        assert_eq!(site.root, PathBuf::from("."));
    }
}
