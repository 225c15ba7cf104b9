//! HTML page assembly.
//!
//! Runs the section renderers in page order and wraps the result in the
//! `base` template.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Utc};
use thiserror::Error;
use tracing::debug;
use vitae_core::{Config, Portfolio};

use crate::{
    sections::{self, NAV_ITEMS, Section},
    template::{Template, TemplateContext, TemplateError, TemplateRegistry, escape_html},
};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// Portfolio page generator.
#[derive(Debug)]
pub struct HtmlGenerator {
    templates: TemplateRegistry,
    config: Config,
    extra_js: Option<String>,
}

impl HtmlGenerator {
    /// Create a new HTML generator with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            config,
            extra_js: None,
        }
    }

    /// Create a generator with custom templates.
    #[must_use]
    pub fn with_templates(config: Config, templates: TemplateRegistry) -> Self {
        Self {
            templates,
            config,
            extra_js: None,
        }
    }

    /// Markup appended before `</body>`, e.g. the dev server's reload script.
    #[must_use]
    pub fn with_extra_js(mut self, js: impl Into<String>) -> Self {
        self.extra_js = Some(js.into());
        self
    }

    /// Register a custom template.
    pub fn register_template(&mut self, template: Template) {
        self.templates.register(template);
    }

    /// Generate the complete page, stamping the footer with the current year.
    pub fn generate_page(&self, portfolio: &Portfolio) -> Result<String> {
        self.generate_page_for_year(portfolio, Utc::now().year())
    }

    /// Generate the complete page with a fixed copyright year.
    pub fn generate_page_for_year(&self, portfolio: &Portfolio, year: i32) -> Result<String> {
        let personal = &portfolio.personal;
        debug!(name = %personal.name, "generating portfolio page");

        let sections = [
            sections::render_about(personal),
            sections::render_skills(&portfolio.skills),
            sections::render_projects(&portfolio.projects, &self.config.projects),
            sections::render_experience(
                &portfolio.experience,
                &portfolio.education,
                &portfolio.achievements,
            ),
            sections::render_contact(personal),
        ];

        let mut content = sections::render_hero(personal);
        for section in &sections {
            content.push('\n');
            content.push_str(&self.wrap_section(section)?);
        }

        let ctx = self
            .build_base_context(portfolio, &content)
            .with_var("footer", sections::render_footer(personal, year));

        Ok(self.templates.render("base", &ctx)?)
    }

    fn wrap_section(&self, section: &Section) -> Result<String> {
        let mut ctx = TemplateContext::new()
            .with_var("id", section.id)
            .with_var("heading", escape_html(section.heading))
            .with_var("body", &section.body);

        if let Some(subtitle) = section.subtitle {
            ctx.insert(
                "subtitle",
                format!(r#"<p class="section-subtitle">{}</p>"#, escape_html(subtitle)),
            );
        }

        Ok(self.templates.render("section", &ctx)?)
    }

    fn build_base_context(&self, portfolio: &Portfolio, content: &str) -> TemplateContext {
        let personal = &portfolio.personal;
        let site = &self.config.site;

        let title = site
            .title
            .clone()
            .unwrap_or_else(|| format!("{} | {}", personal.name, personal.title));

        let nav_links = NAV_ITEMS
            .iter()
            .map(|(id, label)| format!(r##"<a href="#{id}">{label}</a>"##))
            .collect::<Vec<_>>()
            .join("\n                ");

        let mut ctx = TemplateContext::new()
            .with_var("lang", escape_html(&site.language))
            .with_var("title", escape_html(&title))
            .with_var("author", escape_html(&personal.name))
            .with_var("canonical_url", escape_html(&self.config.url_for("/")))
            .with_var("site_title", escape_html(&personal.name))
            .with_var("nav_links", nav_links)
            .with_var("content", content);

        let description = site.description.as_deref().unwrap_or(&personal.bio);
        if !description.trim().is_empty() {
            ctx.insert("description", escape_html(description));
        }

        if let Some(js) = &self.extra_js {
            ctx.insert("custom_js", js);
        }

        ctx
    }

    /// Get the output path of the page.
    #[must_use]
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use vitae_core::PortfolioSource;

    use super::*;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.site.base_url = "https://example.com".to_string();
        config
    }

    fn sample() -> Portfolio {
        PortfolioSource::bundled().load().unwrap()
    }

    #[test]
    fn test_generate_page_structure() {
        let generator = HtmlGenerator::new(test_config());
        let html = generator.generate_page_for_year(&sample(), 2025).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en""#));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/">"#));
        assert!(html.contains("&copy; 2025 Alex Morgan"));

        let order = [
            r#"id="home""#,
            r#"id="about""#,
            r#"id="skills""#,
            r#"id="projects""#,
            r#"id="experience""#,
            r#"id="contact""#,
            r#"<footer class="site-footer">"#,
        ];
        let positions: Vec<usize> = order.iter().map(|m| html.find(m).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_title_and_description_fallback() {
        let portfolio = sample();
        let generator = HtmlGenerator::new(test_config());
        let html = generator.generate_page_for_year(&portfolio, 2025).unwrap();

        let expected = format!(
            "<title>{} | {}</title>",
            portfolio.personal.name, portfolio.personal.title
        );
        assert!(html.contains(&expected));
        assert!(html.contains(&format!(
            r#"<meta name="description" content="{}">"#,
            escape_html(&portfolio.personal.bio)
        )));
    }

    #[test]
    fn test_configured_title_wins() {
        let mut config = test_config();
        config.site.title = Some("Alex's Portfolio".to_string());
        let html = HtmlGenerator::new(config)
            .generate_page_for_year(&sample(), 2025)
            .unwrap();

        assert!(html.contains("<title>Alex&#39;s Portfolio</title>"));
    }

    #[test]
    fn test_nav_links_cover_every_section() {
        let html = HtmlGenerator::new(test_config())
            .generate_page_for_year(&sample(), 2025)
            .unwrap();

        for (id, label) in NAV_ITEMS {
            assert!(html.contains(&format!(r##"<a href="#{id}">{label}</a>"##)));
        }
    }

    #[test]
    fn test_extra_js_injected() {
        let html = HtmlGenerator::new(test_config())
            .with_extra_js("<script>reload()</script>")
            .generate_page_for_year(&sample(), 2025)
            .unwrap();

        assert!(html.contains("<script>reload()</script>\n</body>"));
    }

    #[test]
    fn test_custom_section_template() {
        let mut generator = HtmlGenerator::new(test_config());
        generator.register_template(Template::new(
            "section",
            r#"<div data-section="{{ id }}">{{ body }}</div>"#,
        ));
        let html = generator.generate_page_for_year(&sample(), 2025).unwrap();

        assert!(html.contains(r#"<div data-section="skills">"#));
        assert!(!html.contains(r#"<header class="section-header">"#));
    }

    #[test]
    fn test_output_path() {
        let generator = HtmlGenerator::new(test_config());
        assert_eq!(
            generator.output_path(Path::new("public")),
            PathBuf::from("public/index.html")
        );
    }
}
