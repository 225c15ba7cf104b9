//! Projects section.

use vitae_core::{Project, config::ProjectsConfig, non_blank};

use super::{Section, icon};
use crate::template::escape_html;

/// The visible head of a list plus how many items were cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncated<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

impl Truncated<'_> {
    /// "+N more" when anything was cut.
    #[must_use]
    pub fn overflow_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

/// Keep the first `limit` items.
#[must_use]
pub fn truncate(items: &[String], limit: usize) -> Truncated<'_> {
    let split = items.len().min(limit);
    Truncated {
        shown: &items[..split],
        hidden: items.len() - split,
    }
}

fn render_card(project: &Project, limits: &ProjectsConfig) -> String {
    let badge = if project.featured {
        format!(r#"<span class="badge">{}Featured</span>"#, icon("star"))
    } else {
        String::new()
    };

    let image = non_blank(Some(project.image.as_str()))
        .map(|src| {
            format!(
                r#"<img class="project-image" src="{}" alt="{}" loading="lazy">"#,
                escape_html(src),
                escape_html(&project.name)
            )
        })
        .unwrap_or_default();

    let tags = truncate(&project.tech_stack, limits.tech_stack_limit);
    let mut tags_html: String = tags
        .shown
        .iter()
        .map(|tech| format!(r#"<span class="chip">{}</span>"#, escape_html(tech)))
        .collect();
    if let Some(more) = tags.overflow_label() {
        tags_html.push_str(&format!(r#"<span class="chip chip-overflow">{more}</span>"#));
    }

    let features_html = if project.features.is_empty() {
        String::new()
    } else {
        let features = truncate(&project.features, limits.feature_limit);
        let mut items: String = features
            .shown
            .iter()
            .map(|f| format!("<li>{}</li>", escape_html(f)))
            .collect();
        if let Some(more) = features.overflow_label() {
            items.push_str(&format!(r#"<li class="feature-overflow muted">{more}</li>"#));
        }
        format!(
            r#"<div class="project-features"><p class="muted">Key Features:</p><ul>{items}</ul></div>"#
        )
    };

    let mut links = String::new();
    if let Some(url) = non_blank(project.github_url.as_deref()) {
        links.push_str(&format!(
            r#"<a href="{}" class="project-link" target="_blank" rel="noopener noreferrer">{}Code</a>"#,
            escape_html(url),
            icon("github")
        ));
    }
    if let Some(url) = non_blank(project.live_url.as_deref()) {
        links.push_str(&format!(
            r#"<a href="{}" class="project-link" target="_blank" rel="noopener noreferrer">{}Live</a>"#,
            escape_html(url),
            icon("external-link")
        ));
    }

    format!(
        r#"<article class="card project-card" data-project-id="{id}">
    {badge}
    {image}
    <h3>{name}</h3>
    <p class="muted">{description}</p>
    <div class="project-tech"><p class="muted">Tech Stack:</p>{tags_html}</div>
    {features_html}
    <div class="project-links">{links}</div>
</article>"#,
        id = project.id,
        name = escape_html(&project.name),
        description = escape_html(&project.description),
    )
}

pub fn render_projects(projects: &[Project], limits: &ProjectsConfig) -> Section {
    let cards: String = projects.iter().map(|p| render_card(p, limits)).collect();

    Section {
        id: "projects",
        heading: "Featured Projects",
        subtitle: Some("Showcasing some of my best work in software development"),
        body: format!(r#"<div class="grid projects-grid">{cards}</div>"#),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn project() -> Project {
        Project {
            id: 3,
            name: "Atlas".into(),
            description: "Maps".into(),
            tech_stack: strings(&["Rust", "Tokio", "Axum", "SQLx", "Redis", "Docker"]),
            features: strings(&["Tiles", "Search", "Routing", "Offline"]),
            github_url: Some("https://github.com/x/atlas".into()),
            live_url: Some(String::new()),
            image: String::new(),
            featured: false,
        }
    }

    #[test]
    fn test_truncate() {
        let items = strings(&["a", "b", "c", "d", "e", "f"]);
        let t = truncate(&items, 4);
        assert_eq!(t.shown, &items[..4]);
        assert_eq!(t.hidden, 2);
        assert_eq!(t.overflow_label().as_deref(), Some("+2 more"));

        let short = strings(&["a"]);
        let t = truncate(&short, 4);
        assert_eq!(t.shown.len(), 1);
        assert!(t.overflow_label().is_none());
    }

    #[test]
    fn test_six_tags_show_four_plus_two_more() {
        let html = render_card(&project(), &ProjectsConfig::default());

        for shown in ["Rust", "Tokio", "Axum", "SQLx"] {
            assert!(html.contains(&format!(r#"<span class="chip">{shown}</span>"#)));
        }
        assert!(!html.contains(">Redis<"));
        assert!(!html.contains(">Docker<"));
        assert!(html.contains(r#"<span class="chip chip-overflow">+2 more</span>"#));
    }

    #[test]
    fn test_features_truncated_to_three() {
        let html = render_card(&project(), &ProjectsConfig::default());

        assert_eq!(html.matches("<li>").count(), 3);
        assert!(!html.contains("<li>Offline</li>"));
        assert!(html.contains(r#"<li class="feature-overflow muted">+1 more</li>"#));
    }

    #[test]
    fn test_no_features_block_when_empty() {
        let mut p = project();
        p.features.clear();
        let html = render_card(&p, &ProjectsConfig::default());
        assert!(!html.contains("Key Features"));
    }

    #[test]
    fn test_links_only_for_present_urls() {
        let html = render_card(&project(), &ProjectsConfig::default());

        assert_eq!(html.matches(r#"class="project-link""#).count(), 1);
        assert!(html.contains(r#"href="https://github.com/x/atlas""#));
        assert!(!html.contains("Live</a>"));
    }

    #[test]
    fn test_featured_badge_and_image() {
        let mut p = project();
        assert!(!render_card(&p, &ProjectsConfig::default()).contains("Featured"));

        p.featured = true;
        p.image = "/img/atlas.png".into();
        let html = render_card(&p, &ProjectsConfig::default());
        assert!(html.contains("Featured</span>"));
        assert!(html.contains(r#"src="/img/atlas.png""#));
    }

    #[test]
    fn test_configured_limits() {
        let limits = ProjectsConfig {
            tech_stack_limit: 2,
            feature_limit: 10,
        };
        let html = render_card(&project(), &limits);
        assert!(html.contains("+4 more"));
        assert_eq!(html.matches("<li>").count(), 4);
    }

    #[test]
    fn test_section_keeps_project_order() {
        let mut second = project();
        second.id = 9;
        second.name = "Borealis".into();
        let section = render_projects(&[project(), second], &ProjectsConfig::default());

        assert_eq!(section.id, "projects");
        let atlas = section.body.find("Atlas").unwrap();
        let borealis = section.body.find("Borealis").unwrap();
        assert!(atlas < borealis);
    }
}
