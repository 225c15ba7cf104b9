//! Link policy shared by the hero, contact and footer sections.
//!
//! An entry exists only when its underlying field is a non-blank string.
//! Absent and empty fields are dropped here, so renderers never emit a link
//! without a target.

use vitae_core::{Personal, non_blank};

use crate::template::escape_html;

/// An outbound profile or contact link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: String,
}

impl Link {
    fn new(label: &'static str, icon: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            icon,
            href: href.into(),
        }
    }

    /// Icon-only anchor used in the hero and footer.
    #[must_use]
    pub fn to_icon_html(&self) -> String {
        format!(
            r#"<a href="{}" class="social-link" target="_blank" rel="noopener noreferrer" aria-label="{}">{}</a>"#,
            escape_html(&self.href),
            self.label,
            super::icon(self.icon)
        )
    }
}

/// Social links in display order: GitHub, LinkedIn, Twitter, Website, Email.
#[must_use]
pub fn social_links(personal: &Personal) -> Vec<Link> {
    let social = &personal.social;
    let mut links = Vec::with_capacity(5);

    if let Some(url) = non_blank(social.github.as_deref()) {
        links.push(Link::new("GitHub", "github", url));
    }
    if let Some(url) = non_blank(social.linkedin.as_deref()) {
        links.push(Link::new("LinkedIn", "linkedin", url));
    }
    if let Some(url) = non_blank(social.twitter.as_deref()) {
        links.push(Link::new("Twitter", "twitter", url));
    }
    if let Some(url) = non_blank(social.website.as_deref()) {
        links.push(Link::new("Website", "globe", url));
    }
    if let Some(email) = non_blank(Some(personal.email.as_str())) {
        links.push(Link::new("Email", "mail", format!("mailto:{}", email.trim())));
    }

    links
}

/// One row of the contact list. `href` is `None` for plain-text entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: String,
    pub href: Option<String>,
}

/// Contact rows: Email, Phone, Location, GitHub, LinkedIn.
///
/// Location is never a link. Blank fields produce no row.
#[must_use]
pub fn contact_entries(personal: &Personal) -> Vec<ContactEntry> {
    let mut entries = Vec::with_capacity(5);

    if let Some(email) = non_blank(Some(personal.email.as_str())) {
        let email = email.trim();
        entries.push(ContactEntry {
            label: "Email",
            icon: "mail",
            value: email.to_string(),
            href: Some(format!("mailto:{email}")),
        });
    }

    if let Some(phone) = non_blank(personal.phone.as_deref()) {
        let phone = phone.trim();
        let dial: String = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        // Nothing to dial: show the text without a link.
        let href = dial
            .chars()
            .any(|c| c.is_ascii_digit())
            .then(|| format!("tel:{dial}"));
        entries.push(ContactEntry {
            label: "Phone",
            icon: "phone",
            value: phone.to_string(),
            href,
        });
    }

    if let Some(location) = non_blank(Some(personal.location.as_str())) {
        entries.push(ContactEntry {
            label: "Location",
            icon: "map-pin",
            value: location.to_string(),
            href: None,
        });
    }

    if let Some(url) = non_blank(personal.social.github.as_deref()) {
        let username = personal.username.as_deref().unwrap_or_default();
        entries.push(ContactEntry {
            label: "GitHub",
            icon: "github",
            value: format!("@{username}"),
            href: Some(url.to_string()),
        });
    }

    if let Some(url) = non_blank(personal.social.linkedin.as_deref()) {
        entries.push(ContactEntry {
            label: "LinkedIn",
            icon: "linkedin",
            value: "Connect".to_string(),
            href: Some(url.to_string()),
        });
    }

    entries
}
