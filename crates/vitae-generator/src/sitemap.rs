//! Sitemap generation.
//!
//! The portfolio is a single page, so the sitemap lists exactly one URL.

use std::io::Write;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;
use vitae_core::Config;

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate sitemap XML for the site root, stamped with `lastmod`.
    #[must_use]
    pub fn generate(&self, lastmod: DateTime<Utc>) -> String {
        let loc = self.config.url_for("/");
        debug!(%loc, "generating sitemap");

        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            lastmod.format("%Y-%m-%d")
        ));
        xml.push_str("    <changefreq>monthly</changefreq>\n");
        xml.push_str("    <priority>1.0</priority>\n");
        xml.push_str("  </url>\n");
        xml.push_str("</urlset>\n");
        xml
    }

    /// Write the sitemap to a writer.
    pub fn write_to<W: Write>(&self, lastmod: DateTime<Utc>, writer: &mut W) -> Result<()> {
        writer.write_all(self.generate(lastmod).as_bytes())?;
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
