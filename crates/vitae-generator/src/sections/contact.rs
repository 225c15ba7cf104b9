//! Contact section.

use vitae_core::{Personal, non_blank};

use super::{
    Section, icon,
    links::{ContactEntry, contact_entries},
};
use crate::template::escape_html;

fn render_entry(entry: &ContactEntry) -> String {
    let value = escape_html(&entry.value);
    let value = match &entry.href {
        Some(href) => {
            let external = if href.starts_with("http") {
                r#" target="_blank" rel="noopener noreferrer""#
            } else {
                ""
            };
            format!(r#"<a href="{}"{external}>{value}</a>"#, escape_html(href))
        }
        None => format!("<span>{value}</span>"),
    };

    format!(
        r#"<div class="contact-item">{}<div><p class="muted">{}</p>{value}</div></div>"#,
        icon(entry.icon),
        entry.label
    )
}

/// The message form posts through the visitor's mail client.
fn render_form(email: &str) -> String {
    format!(
        r#"<form class="card contact-form" action="mailto:{email}" method="post" enctype="text/plain">
    <label>Name<input type="text" name="name" required></label>
    <label>Email<input type="email" name="email" required></label>
    <label>Subject<input type="text" name="subject" required></label>
    <label>Message<textarea name="message" rows="5" required></textarea></label>
    <button type="submit" class="button button-primary">{send}Send Message</button>
</form>"#,
        email = escape_html(email.trim()),
        send = icon("send"),
    )
}

pub fn render_contact(personal: &Personal) -> Section {
    let entries: String = contact_entries(personal).iter().map(render_entry).collect();
    let form = non_blank(Some(personal.email.as_str()))
        .map(render_form)
        .unwrap_or_default();

    let body = format!(
        r#"<div class="grid contact-grid">
    <div class="contact-info">
        <h3>Let's Connect</h3>
        <p class="muted">I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision.</p>
        {entries}
    </div>
    {form}
</div>"#
    );

    Section {
        id: "contact",
        heading: "Get In Touch",
        subtitle: Some("Have a project in mind or want to collaborate? Let's talk!"),
        body,
    }
}
