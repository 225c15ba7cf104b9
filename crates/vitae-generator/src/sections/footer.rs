//! Site footer.

use vitae_core::Personal;

use super::{NAV_ITEMS, links::social_links};
use crate::template::escape_html;

/// Render the footer. `year` goes into the copyright line.
pub fn render_footer(personal: &Personal, year: i32) -> String {
    let quick_links: String = NAV_ITEMS
        .iter()
        .map(|(id, label)| format!(r##"<li><a href="#{id}">{label}</a></li>"##))
        .collect();

    let social: String = social_links(personal)
        .iter()
        .map(|link| link.to_icon_html())
        .collect();
    let social_html = if social.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="footer-column"><h4>Connect</h4><div class="social-links">{social}</div></div>"#)
    };

    let name = escape_html(&personal.name);

    format!(
        r#"<footer class="site-footer">
    <div class="container">
        <div class="grid footer-grid">
            <div class="footer-column">
                <h4>{name}</h4>
                <p class="muted">{title}. Building things for the web.</p>
            </div>
            <div class="footer-column">
                <h4>Quick Links</h4>
                <ul>{quick_links}</ul>
            </div>
            {social_html}
        </div>
        <p class="copyright muted">&copy; {year} {name}. All rights reserved.</p>
    </div>
</footer>"#,
        title = escape_html(&personal.title),
    )
}
