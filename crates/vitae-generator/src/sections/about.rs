//! About section.

use vitae_core::Personal;

use super::{Section, icon};
use crate::template::escape_html;

/// Fixed highlight cards: icon, title, description.
const HIGHLIGHTS: [(&str, &str, &str); 4] = [
    (
        "code-2",
        "Clean Code",
        "Writing maintainable, scalable, and well-documented code",
    ),
    (
        "rocket",
        "Fast Performance",
        "Optimizing applications for speed and efficiency",
    ),
    (
        "users",
        "Team Player",
        "Collaborating effectively with cross-functional teams",
    ),
    (
        "award",
        "Best Practices",
        "Following industry standards and modern methodologies",
    ),
];

pub fn render_about(personal: &Personal) -> Section {
    let highlights: String = HIGHLIGHTS
        .iter()
        .map(|(icon_name, title, description)| {
            format!(
                r#"<div class="card highlight">{}<h4>{title}</h4><p class="muted">{description}</p></div>"#,
                icon(icon_name)
            )
        })
        .collect();

    let body = format!(
        r#"<div class="grid about-grid">
    <div class="about-text">
        <h3>{title}</h3>
        <p>{bio}</p>
    </div>
    <div class="grid highlights">{highlights}</div>
</div>"#,
        title = escape_html(&personal.title),
        bio = escape_html(&personal.bio),
    );

    Section {
        id: "about",
        heading: "About Me",
        subtitle: None,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_shows_title_bio_and_highlights() {
        let personal = Personal {
            name: "N".into(),
            username: None,
            title: "Data Engineer".into(),
            bio: "Pipelines > dashboards".into(),
            location: String::new(),
            email: String::new(),
            phone: None,
            avatar: None,
            social: Default::default(),
        };
        let section = render_about(&personal);

        assert_eq!(section.id, "about");
        assert!(section.body.contains("<h3>Data Engineer</h3>"));
        assert!(section.body.contains("Pipelines &gt; dashboards"));
        assert_eq!(section.body.matches("card highlight").count(), 4);
    }
}
