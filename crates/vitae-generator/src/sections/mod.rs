//! Section Renderers
//!
//! Each module turns one slice of the portfolio document into an HTML
//! fragment. Renderers are pure: same input, same markup, no I/O.
//!
//! Hero and footer produce complete elements. The other sections return a
//! [`Section`] whose body is wrapped by the `section` template.

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod links;
pub mod projects;
pub mod skills;

pub use about::render_about;
pub use contact::render_contact;
pub use experience::render_experience;
pub use footer::render_footer;
pub use hero::render_hero;
pub use projects::render_projects;
pub use skills::render_skills;

/// Anchors of the page sections, in page order, with their navigation labels.
pub const NAV_ITEMS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

/// A titled page section waiting to be wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Anchor id, also used in the CSS class.
    pub id: &'static str,
    pub heading: &'static str,
    pub subtitle: Option<&'static str>,
    pub body: String,
}

/// Render an icon placeholder; the stylesheet or a script maps names to glyphs.
pub(crate) fn icon(name: &str) -> String {
    format!(r#"<span class="icon" data-icon="{name}" aria-hidden="true"></span>"#)
}
