//! Hero section: avatar, name, title, location, bio, social links and calls to action.

use vitae_core::{Personal, non_blank};

use super::{icon, links::social_links};
use crate::template::escape_html;

/// Render the hero section.
///
/// Shows the avatar image when one is set, otherwise the name initial.
pub fn render_hero(personal: &Personal) -> String {
    let avatar = match non_blank(personal.avatar.as_deref()) {
        Some(src) => format!(
            r#"<img src="{}" alt="{}">"#,
            escape_html(src),
            escape_html(&personal.name)
        ),
        None => escape_html(&personal.initial()),
    };

    let location = non_blank(Some(personal.location.as_str()))
        .map(|loc| {
            format!(
                r#"<p class="hero-location muted">{}<span>{}</span></p>"#,
                icon("map-pin"),
                escape_html(loc)
            )
        })
        .unwrap_or_default();

    let links: String = social_links(personal)
        .iter()
        .map(|link| link.to_icon_html())
        .collect();

    let social_html = if links.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="social-links">{links}</div>"#)
    };

    format!(
        r##"<section id="home" class="hero">
    <div class="container">
        <div class="avatar">{avatar}</div>
        <h1>{name}</h1>
        <h2 class="hero-title">{title}</h2>
        {location}
        <p class="hero-bio">{bio}</p>
        {social_html}
        <div class="cta-links">
            <a href="#contact" class="button button-primary">Get In Touch</a>
            <a href="#projects" class="button button-secondary">View Projects</a>
        </div>
        <a href="#about" class="scroll-indicator" aria-label="Scroll to about">{chevron}</a>
    </div>
</section>"##,
        name = escape_html(&personal.name),
        title = escape_html(&personal.title),
        bio = escape_html(&personal.bio),
        chevron = icon("chevron-down"),
    )
}
