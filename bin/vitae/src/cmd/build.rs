//! Build command - generates the static site

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use color_eyre::eyre::{Result, WrapErr};
use vitae_generator::{BuildStats, Builder};

use super::Site;

/// Run the build command.
///
/// Renders the portfolio document to `index.html` plus sitemap, robots.txt
/// and static assets.
pub fn run(config_path: &Path, output: Option<&Path>, base_url: Option<&str>) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, ?base_url, "Starting build");

    let mut site = Site::load(config_path)?;

    if let Some(url) = base_url {
        tracing::info!(base_url = url, "Overriding site base_url from CLI");
        site.config.site.base_url = url.trim_end_matches('/').to_string();
    }

    let output_dir = output.map_or_else(|| site.output_dir(), Path::to_path_buf);
    tracing::debug!(config = ?site.config, "Loaded configuration");

    let stats = builder(&site, &output_dir)
        .build()
        .wrap_err_with(|| format!("Build failed for {}", site.data_path().display()))?;

    print_stats(&stats, &output_dir);
    tracing::info!(?stats, duration = ?start.elapsed(), "Build completed successfully");

    Ok(())
}

/// Builder for `site`, picking up the static directory when it exists.
pub(crate) fn builder(site: &Site, output_dir: &Path) -> Builder {
    let mut builder = Builder::new(site.config.clone(), site.data_path(), output_dir);

    let static_dir: PathBuf = site.static_dir();
    if static_dir.is_dir() {
        tracing::info!(dir = %static_dir.display(), "Found static directory, will copy to output");
        builder = builder.with_static_dir(static_dir);
    }

    builder
}

fn print_stats(stats: &BuildStats, output_dir: &Path) {
    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Sections:   {}", stats.sections);
    if !stats.omitted.is_empty() {
        println!("  Omitted:    {}", stats.omitted.join(", "));
    }
    println!("  Assets:     {}", stats.assets);
    println!("  Robots:     {}", if stats.robots { "yes" } else { "disabled" });
    println!();
    println!("  Duration:   {}ms", stats.duration_ms);
    println!("  Output:     {}", output_dir.display());
    println!();
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_build_scaffolded_site() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("site");
        crate::cmd::new::run(&root).unwrap();

        let output = dir.path().join("dist");
        run(
            &root.join("config.toml"),
            Some(&output),
            Some("https://me.example.com/"),
        )
        .unwrap();

        let sitemap = fs::read_to_string(output.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://me.example.com/</loc>"));
        assert!(output.join("index.html").exists());
    }

    #[test]
    fn test_build_missing_config_fails() {
        let dir = TempDir::new().unwrap();
        assert!(run(&dir.path().join("config.toml"), None, None).is_err());
    }
}
