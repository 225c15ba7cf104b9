//! Build orchestration.
//!
//! Coordinates the full site build: load, clean, assets, page, sitemap, robots.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};
use vitae_core::{Config, CoreError, Portfolio, load_portfolio_data};

use crate::{
    assets::{AssetError, AssetManifest, AssetProcessor, MANIFEST_FILE},
    html::{HtmlError, HtmlGenerator},
    robots::{RobotsError, RobotsGenerator},
    sections::NAV_ITEMS,
    sitemap::{SitemapError, SitemapGenerator},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Document or configuration error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Sitemap generation error.
    #[error("sitemap error: {0}")]
    Sitemap(#[from] SitemapError),

    /// Robots.txt generation error.
    #[error("robots error: {0}")]
    Robots(#[from] RobotsError),

    /// Asset error.
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),
}

impl BuildError {
    /// Whether the build failed on the portfolio document itself.
    #[must_use]
    pub fn is_malformed_data(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_malformed_data())
    }
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Page sections, footer included.
pub const SECTION_COUNT: usize = NAV_ITEMS.len() + 1;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of sections rendered into the page.
    pub sections: usize,

    /// Optional blocks left out because their lists were empty.
    pub omitted: Vec<&'static str>,

    /// Number of assets processed.
    pub assets: usize,

    /// Whether robots.txt was written.
    pub robots: bool,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    data_path: PathBuf,
    output_dir: PathBuf,
    static_dir: Option<PathBuf>,
    extra_js: Option<String>,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(
        config: Config,
        data_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config,
            data_path: data_path.into(),
            output_dir: output_dir.into(),
            static_dir: None,
            extra_js: None,
        }
    }

    /// Set the static assets directory.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Inject markup before `</body>` of the generated page.
    #[must_use]
    pub fn with_extra_js(mut self, js: impl Into<String>) -> Self {
        self.extra_js = Some(js.into());
        self
    }

    /// Execute the full build process.
    ///
    /// The document is loaded before the output directory is touched, so a
    /// malformed document leaves the previous output as it was.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();

        info!(
            data = %self.data_path.display(),
            output = %self.output_dir.display(),
            "starting build"
        );

        // 1. Load and validate the document
        let portfolio = load_portfolio_data(&self.data_path)?;

        // 2. Clean output directory
        self.clean_output()?;

        // 3. Copy assets so the page can point at fingerprinted names
        let manifest = match &self.static_dir {
            Some(dir) => self.process_assets(dir)?,
            None => AssetManifest::new(),
        };

        // 4. Generate the page
        let portfolio = resolve_asset_refs(portfolio, &manifest);
        self.generate_page(&portfolio)?;

        // 5. Sitemap and robots.txt
        self.generate_sitemap()?;
        let robots = RobotsGenerator::new(self.config.clone()).generate(&self.output_dir)?;

        let stats = BuildStats {
            sections: SECTION_COUNT,
            omitted: omitted_blocks(&portfolio),
            assets: manifest.len(),
            robots,
            duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };

        info!(
            sections = stats.sections,
            omitted = ?stats.omitted,
            assets = stats.assets,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Clean the output directory.
    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    fn generate_page(&self, portfolio: &Portfolio) -> Result<()> {
        let mut generator = HtmlGenerator::new(self.config.clone());
        if let Some(js) = &self.extra_js {
            generator = generator.with_extra_js(js.clone());
        }

        let html = generator.generate_page(portfolio)?;
        let output_path = generator.output_path(&self.output_dir);
        fs::write(&output_path, html)?;

        info!(path = %output_path.display(), "wrote page");
        Ok(())
    }

    fn generate_sitemap(&self) -> Result<()> {
        let generator = SitemapGenerator::new(self.config.clone());
        let output_path = self.output_dir.join("sitemap.xml");
        let mut file = fs::File::create(&output_path)?;
        generator.write_to(Utc::now(), &mut file)?;

        info!(path = %output_path.display(), "generated sitemap");
        Ok(())
    }

    fn process_assets(&self, static_dir: &Path) -> Result<AssetManifest> {
        let processor = AssetProcessor::new(self.config.build.fingerprint);
        let manifest = processor.process(static_dir, &self.output_dir)?;

        if self.config.build.fingerprint && !manifest.is_empty() {
            fs::write(self.output_dir.join(MANIFEST_FILE), manifest.to_json()?)?;
        }

        Ok(manifest)
    }
}

/// Point avatar and project images at their copied, possibly renamed, files.
fn resolve_asset_refs(mut portfolio: Portfolio, manifest: &AssetManifest) -> Portfolio {
    if manifest.is_empty() {
        return portfolio;
    }

    if let Some(avatar) = &mut portfolio.personal.avatar {
        *avatar = manifest.resolve(avatar).to_string();
    }
    for project in &mut portfolio.projects {
        project.image = manifest.resolve(&project.image).to_string();
    }
    portfolio
}

fn omitted_blocks(portfolio: &Portfolio) -> Vec<&'static str> {
    let mut omitted = Vec::new();
    if portfolio.education.is_empty() {
        omitted.push("education");
    }
    if portfolio.achievements.is_empty() {
        omitted.push("achievements");
    }
    omitted
}
