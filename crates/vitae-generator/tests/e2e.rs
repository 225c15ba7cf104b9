//! End-to-end tests for Vitae.
//!
//! These tests load the fixture document, render it, and run full builds.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use vitae_core::{Config, PortfolioSource, load_portfolio_data};
use vitae_generator::{Builder, HtmlGenerator, sections};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/portfolio.json")
}

fn config() -> Config {
    let mut config = Config::default();
    config.site.base_url = "https://samr.dev".to_string();
    config
}

fn render_fixture() -> String {
    let portfolio = load_portfolio_data(&fixture()).expect("fixture should load");
    HtmlGenerator::new(config())
        .generate_page_for_year(&portfolio, 2026)
        .expect("page should render")
}

/// Slice of `html` from `start` up to the next occurrence of `end`.
fn between<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
    let from = html.find(start).expect("start marker present");
    let rest = &html[from..];
    let to = rest.find(end).expect("end marker present");
    &rest[..to]
}

#[test]
fn test_load_is_idempotent() {
    let first = load_portfolio_data(&fixture()).unwrap();
    let second = load_portfolio_data(&fixture()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_current_role_shows_present() {
    let html = render_fixture();
    assert!(html.contains("Mar 2022 - Present"));
    assert!(!html.contains("Dec 2030"));
}

#[test]
fn test_past_role_shows_end_date() {
    let html = render_fixture();
    assert!(html.contains("Jan 2018 - Feb 2022"));
}

#[test]
fn test_unknown_skill_category_uses_default_style() {
    let html = render_fixture();
    let card = between(&html, r#"data-category="Soft Skills""#, "</span>\n</div>");

    assert!(card.contains("#3B82F6, #A855F7"));
    assert!(card.contains(r#"data-icon="code-2""#));
    assert!(card.contains("2 skills"));
}

#[test]
fn test_skill_categories_keep_document_order() {
    let html = render_fixture();
    let soft = html.find(r#"data-category="Soft Skills""#).unwrap();
    let devops = html.find(r#"data-category="DevOps""#).unwrap();
    let ai = html.find(r#"data-category="AI/ML""#).unwrap();

    assert!(soft < devops && devops < ai);
    assert!(html.contains("1 skill<"));
}

#[test]
fn test_six_tags_truncate_to_four() {
    let html = render_fixture();
    let card = between(&html, r#"data-project-id="10""#, "</article>");

    for tag in ["Rust", "Nix", "Tokio", "gRPC"] {
        assert!(card.contains(&format!(r#"<span class="chip">{tag}</span>"#)));
    }
    assert!(!card.contains(">S3<"));
    assert!(!card.contains(">Prometheus<"));
    assert!(card.contains("+2 more"));
    assert!(!card.contains("Key Features"));
    assert!(!card.contains("Live</a>"));
}

#[test]
fn test_featured_project_has_badge() {
    let html = render_fixture();
    let card = between(&html, r#"data-project-id="11""#, "</article>");

    assert!(card.contains("Featured</span>"));
    assert!(card.contains("<li>Uptime checks</li>"));
    assert!(!card.contains("project-link"));
}

#[test]
fn test_blank_links_are_omitted() {
    let portfolio = load_portfolio_data(&fixture()).unwrap();
    let hero = sections::render_hero(&portfolio.personal);

    assert!(!hero.contains("linkedin"));
    assert_eq!(hero.matches(r#"href="https://samr.dev""#).count(), 1);
    assert_eq!(hero.matches(r#"href="https://github.com/samr""#).count(), 1);

    let html = render_fixture();
    assert!(!html.contains(r#"href="""#));
    assert!(!html.contains("Connect</a>"));
}

#[test]
fn test_empty_education_and_achievements_omitted() {
    let html = render_fixture();
    assert!(!html.contains("education-block"));
    assert!(!html.contains("achievements-block"));
    assert!(!html.contains("Certifications"));
}

#[test]
fn test_document_text_is_escaped() {
    let html = render_fixture();
    assert!(html.contains("Keeping &lt;clusters&gt; calm &amp; deploys boring."));
    assert!(!html.contains("<clusters>"));
}

#[test]
fn test_missing_name_is_malformed() {
    let mut doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(fixture()).unwrap()).unwrap();
    doc["personal"]
        .as_object_mut()
        .unwrap()
        .remove("name");

    let err = PortfolioSource::inline("broken.json", doc.to_string())
        .load()
        .unwrap_err();
    assert!(err.is_malformed_data());
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_duplicate_ids_are_malformed() {
    let mut doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(fixture()).unwrap()).unwrap();
    doc["projects"][1]["id"] = 10.into();

    let err = PortfolioSource::inline("dupes.json", doc.to_string())
        .load()
        .unwrap_err();
    assert!(err.is_malformed_data());
    assert!(err.to_string().contains("duplicate id 10"));
}

#[test]
fn test_full_build() {
    let output = TempDir::new().unwrap();
    let stats = Builder::new(config(), fixture(), output.path())
        .build()
        .unwrap();

    assert_eq!(stats.sections, 7);
    assert_eq!(stats.omitted, vec!["education", "achievements"]);

    let index = fs::read_to_string(output.path().join("index.html")).unwrap();
    assert!(index.contains("<title>Sam Rivera | Platform Engineer</title>"));

    let sitemap = fs::read_to_string(output.path().join("sitemap.xml")).unwrap();
    assert!(sitemap.contains("<loc>https://samr.dev/</loc>"));

    let robots = fs::read_to_string(output.path().join("robots.txt")).unwrap();
    assert!(robots.contains("Sitemap: https://samr.dev/sitemap.xml"));
}

#[test]
fn test_failed_build_writes_no_page() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("portfolio.json");
    fs::write(&data, "{ not json").unwrap();
    let output = dir.path().join("public");

    let err = Builder::new(config(), &data, &output).build().unwrap_err();

    assert!(err.is_malformed_data());
    assert!(!output.join("index.html").exists());
}
