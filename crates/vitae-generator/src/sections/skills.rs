//! Skills section.
//!
//! Category presentation comes from a static lookup table. Categories the
//! table does not know get [`DEFAULT_CATEGORY_STYLE`].

use vitae_core::Skills;

use super::{Section, icon};
use crate::template::escape_html;

/// Icon and gradient for a skill category card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
}

impl CategoryStyle {
    const fn new(icon: &'static str, gradient_from: &'static str, gradient_to: &'static str) -> Self {
        Self {
            icon,
            gradient_from,
            gradient_to,
        }
    }
}

/// Style for categories missing from [`CATEGORY_STYLES`].
pub const DEFAULT_CATEGORY_STYLE: CategoryStyle = CategoryStyle::new("code-2", "#3B82F6", "#A855F7");

/// Known categories, matched exactly by name.
pub const CATEGORY_STYLES: [(&str, CategoryStyle); 7] = [
    ("Frontend", CategoryStyle::new("code-2", "#3B82F6", "#06B6D4")),
    ("Backend", CategoryStyle::new("server", "#A855F7", "#EC4899")),
    ("Database", CategoryStyle::new("database", "#22C55E", "#10B981")),
    ("DevOps", CategoryStyle::new("cloud", "#F97316", "#EF4444")),
    ("AI/ML", CategoryStyle::new("brain", "#8B5CF6", "#A855F7")),
    ("Tools", CategoryStyle::new("wrench", "#EAB308", "#F59E0B")),
    ("Architecture", CategoryStyle::new("network", "#6366F1", "#3B82F6")),
];

/// Look up the style for a category, falling back to the default.
#[must_use]
pub fn category_style(category: &str) -> &'static CategoryStyle {
    CATEGORY_STYLES
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(&DEFAULT_CATEGORY_STYLE, |(_, style)| style)
}

/// Whether the category has an entry of its own in the table.
#[must_use]
pub fn has_dedicated_style(category: &str) -> bool {
    CATEGORY_STYLES.iter().any(|(name, _)| *name == category)
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 skill".to_string()
    } else {
        format!("{count} skills")
    }
}

pub fn render_skills(skills: &Skills) -> Section {
    let cards: String = skills
        .iter()
        .map(|(category, list)| {
            let style = category_style(category);
            let chips: String = list
                .iter()
                .map(|skill| format!(r#"<span class="chip">{}</span>"#, escape_html(skill)))
                .collect();

            format!(
                r#"<div class="card skill-card" data-category="{name}">
    <div class="skill-card-header">
        <div class="skill-icon" style="background: linear-gradient(135deg, {from}, {to})">{icon}</div>
        <h3>{name}</h3>
    </div>
    <div class="skill-list">{chips}</div>
    <span class="skill-count muted">{count}</span>
</div>"#,
                name = escape_html(category),
                from = style.gradient_from,
                to = style.gradient_to,
                icon = icon(style.icon),
                count = count_label(list.len()),
            )
        })
        .collect();

    Section {
        id: "skills",
        heading: "Skills & Technologies",
        subtitle: Some("A comprehensive toolkit for building modern, scalable applications"),
        body: format!(r#"<div class="grid skills-grid">{cards}</div>"#),
    }
}
