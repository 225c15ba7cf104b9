//! Page templates.
//!
//! A small `{{ variable }}` interpolation engine plus the built-in `base` and
//! `section` templates. Values are inserted verbatim, so callers escape
//! document text with [`escape_html`] before putting it into a context.

use std::collections::HashMap;

use thiserror::Error;

/// Errors raised while rendering a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A `{{ name }}` placeholder had no value in the context.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// No template is registered under this name.
    #[error("template not found: {0}")]
    NotFound(String),

    #[error("invalid template syntax: {0}")]
    InvalidSyntax(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;

/// Named values available to placeholders.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }
}

/// A placeholder parsed out of `{{ ... }}`.
struct Placeholder<'a> {
    name: &'a str,
    optional: bool,
}

impl<'a> Placeholder<'a> {
    fn parse(inner: &'a str) -> Self {
        let inner = inner.trim();
        match inner.strip_suffix('?') {
            Some(name) => Self {
                name: name.trim_end(),
                optional: true,
            },
            None => Self {
                name: inner,
                optional: false,
            },
        }
    }
}

/// Template source with `{{ name }}` placeholders.
///
/// `{{ name? }}` renders as empty when `name` is not in the context.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fill every placeholder from `context`.
    ///
    /// The source is scanned once, front to back, so text coming from the
    /// context is never itself treated as a placeholder.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut out = String::with_capacity(self.content.len());
        let mut rest = self.content.as_str();

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];
            let close = after_open.find("}}").ok_or_else(|| {
                TemplateError::InvalidSyntax(format!("unclosed {{{{ in template `{}`", self.name))
            })?;

            let placeholder = Placeholder::parse(&after_open[..close]);
            match context.get(placeholder.name) {
                Some(value) => out.push_str(value),
                None if placeholder.optional => {}
                None => return Err(TemplateError::MissingVariable(placeholder.name.to_string())),
            }

            rest = &after_open[close + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// Templates by name.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    /// Registry preloaded with `base` and `section`.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register(Template::new("base", DEFAULT_BASE_TEMPLATE));
        registry.register(Template::new("section", DEFAULT_SECTION_TEMPLATE));
        registry
    }

    /// Register a template, replacing any template with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Look up `name` and render it.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
        template.render(context)
    }
}

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // Keeps document text from opening a template placeholder.
            '{' => out.push_str("&#123;"),
            _ => out.push(c),
        }
    }
    out
}

/// Section wrapper: heading, optional subtitle, body.
pub const DEFAULT_SECTION_TEMPLATE: &str = r#"<section id="{{ id }}" class="section section-{{ id }}">
    <div class="container">
        <header class="section-header">
            <h2>{{ heading }}</h2>
            <div class="section-rule"></div>
            {{ subtitle? }}
        </header>
        {{ body }}
    </div>
</section>"#;

/// Page shell: head metadata, sticky nav, main content and footer slot.
pub const DEFAULT_BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}" class="scroll-smooth">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <meta name="description" content="{{ description? }}">
    <meta name="author" content="{{ author }}">
    <link rel="canonical" href="{{ canonical_url }}">
    <meta property="og:title" content="{{ title }}">
    <meta property="og:description" content="{{ description? }}">
    <meta property="og:url" content="{{ canonical_url }}">
    <meta property="og:type" content="profile">
    {{ custom_css? }}
    <style>
        :root {
            --color-bg: #0B1120;
            --color-surface: #111827;
            --color-text: #F1F5F9;
            --color-muted: #94A3B8;
            --color-border: #1F2937;
            --color-accent: #3B82F6;
            color-scheme: dark;
        }

        *, *::before, *::after { box-sizing: border-box; }
        * { margin: 0; padding: 0; }

        body {
            font-family: 'Inter', system-ui, -apple-system, sans-serif;
            line-height: 1.7;
            color: var(--color-text);
            background-color: var(--color-bg);
        }

        a { color: var(--color-accent); text-decoration: none; }
        a:hover { text-decoration: underline; }

        .container { width: 100%; max-width: 1100px; margin: 0 auto; padding: 0 1.5rem; }

        .site-nav {
            position: sticky;
            top: 0;
            z-index: 50;
            backdrop-filter: blur(8px);
            background-color: rgba(11, 17, 32, 0.85);
            border-bottom: 1px solid var(--color-border);
        }
        .site-nav .container { display: flex; justify-content: space-between; padding-top: 1rem; padding-bottom: 1rem; }
        .site-nav .nav-links { display: flex; gap: 1.5rem; }
        .site-nav .nav-links a { color: var(--color-muted); font-size: 0.9rem; }

        .section { padding: 5rem 0; }
        .section-header { text-align: center; margin-bottom: 3rem; }
        .section-header h2 { font-size: 2.5rem; }
        .section-rule { width: 5rem; height: 4px; margin: 0.75rem auto; border-radius: 9999px; background: linear-gradient(90deg, #3B82F6, #A855F7, #06B6D4); }
        .section-subtitle { color: var(--color-muted); }

        .card { background: var(--color-surface); border: 1px solid var(--color-border); border-radius: 1rem; padding: 1.5rem; }
        .grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
        .chip { display: inline-block; padding: 0.25rem 0.75rem; margin: 0 0.25rem 0.5rem 0; border-radius: 9999px; background: var(--color-border); font-size: 0.85rem; }
        .chip-overflow { color: var(--color-muted); }
        .badge { display: inline-block; padding: 0.125rem 0.625rem; border-radius: 9999px; font-size: 0.75rem; background: linear-gradient(90deg, #F59E0B, #F97316); color: #111827; }
        .muted { color: var(--color-muted); }

        .hero { min-height: 90vh; display: flex; align-items: center; text-align: center; }
        .avatar { width: 8rem; height: 8rem; margin: 0 auto 1.5rem; border-radius: 9999px; display: flex; align-items: center; justify-content: center; font-size: 3rem; font-weight: 700; background: linear-gradient(135deg, #3B82F6, #A855F7); overflow: hidden; }
        .avatar img { width: 100%; height: 100%; object-fit: cover; }
        .hero h1 { font-size: 3.5rem; }
        .social-links, .cta-links { display: flex; justify-content: center; gap: 1rem; margin-top: 1.5rem; }

        .timeline-item { border-left: 2px solid var(--color-border); padding-left: 1.5rem; margin-bottom: 2rem; }
        .timeline-meta { display: flex; gap: 1rem; color: var(--color-muted); font-size: 0.9rem; }

        .site-footer { border-top: 1px solid var(--color-border); padding: 3rem 0 2rem; }
        .site-footer .grid { margin-bottom: 2rem; }

        @media (max-width: 640px) {
            .hero h1 { font-size: 2.25rem; }
            .site-nav .nav-links { display: none; }
        }

        @media (prefers-reduced-motion: reduce) {
            html { scroll-behavior: auto; }
        }
    </style>
</head>
<body>
    <nav class="site-nav">
        <div class="container">
            <a href="#home" class="site-title">{{ site_title }}</a>
            <div class="nav-links">
                {{ nav_links }}
            </div>
        </div>
    </nav>
    <main>
        {{ content }}
    </main>
    {{ footer? }}
    {{ custom_js? }}
</body>
</html>"##;
