//! Portfolio document schema and accessor.
//!
//! The portfolio document is a single JSON file holding everything the site
//! shows. It is read once, validated, and then handed by reference to the
//! section renderers. Nothing mutates it after loading.

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{CoreError, Result},
    validation,
};

/// Sample document shipped with the binary, used by `vitae new`.
pub const SAMPLE_PORTFOLIO_JSON: &str = include_str!("../data/sample_portfolio.json");

/// Skill categories in document order, each with its ordered skill names.
pub type Skills = IndexMap<String, Vec<String>>;

/// The complete portfolio document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: Personal,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

/// Identity and contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub name: String,
    /// Handle shown next to the GitHub contact entry.
    #[serde(default)]
    pub username: Option<String>,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Avatar image reference. The hero falls back to the name initial.
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub social: Social,
}

/// Social profile URLs. Every entry is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    pub image: String,
    /// Only drives the "Featured" badge.
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: u64,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    /// Ignored for display while `current` is set.
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: u64,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: u64,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
}

/// Where a portfolio document comes from.
#[derive(Debug, Clone)]
pub enum PortfolioSource {
    /// A JSON file on disk.
    File(PathBuf),
    /// JSON held in memory; `label` stands in for the path in error messages.
    Inline {
        label: PathBuf,
        json: Cow<'static, str>,
    },
}

impl PortfolioSource {
    /// Source backed by a file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Source backed by an in-memory JSON string.
    pub fn inline(label: impl Into<PathBuf>, json: impl Into<Cow<'static, str>>) -> Self {
        Self::Inline {
            label: label.into(),
            json: json.into(),
        }
    }

    /// The sample document bundled into the binary.
    #[must_use]
    pub fn bundled() -> Self {
        Self::inline("<bundled sample>", SAMPLE_PORTFOLIO_JSON)
    }

    /// Path used when reporting errors for this source.
    #[must_use]
    pub fn origin(&self) -> &Path {
        match self {
            Self::File(path) => path,
            Self::Inline { label, .. } => label,
        }
    }

    /// Read, parse and validate the document.
    ///
    /// Every call re-reads the source; the result is the same as long as the
    /// source is unchanged.
    pub fn load(&self) -> Result<Portfolio> {
        match self {
            Self::File(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        CoreError::config(format!(
                            "Portfolio data file not found: {}",
                            path.display()
                        ))
                    } else {
                        CoreError::Io(e)
                    }
                })?;
                Portfolio::from_json_str(&json, path)
            }
            Self::Inline { label, json } => Portfolio::from_json_str(json, label),
        }
    }
}

/// Load the portfolio document stored at `path`.
pub fn load_portfolio_data(path: &Path) -> Result<Portfolio> {
    PortfolioSource::file(path).load()
}

impl Portfolio {
    /// Parse and validate a document from JSON text.
    ///
    /// `origin` is only used to label errors.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self> {
        let portfolio: Portfolio =
            serde_json::from_str(json).map_err(|e| CoreError::malformed(origin, e.to_string()))?;

        validation::validate_portfolio(&portfolio)
            .map_err(|message| CoreError::malformed(origin, message))?;

        debug!(
            origin = %origin.display(),
            skill_categories = portfolio.skills.len(),
            projects = portfolio.projects.len(),
            experience = portfolio.experience.len(),
            education = portfolio.education.len(),
            achievements = portfolio.achievements.len(),
            "loaded portfolio document"
        );

        Ok(portfolio)
    }
}

impl Project {
    /// Whether the project links anywhere (code or live deployment).
    #[must_use]
    pub fn has_links(&self) -> bool {
        non_blank(self.github_url.as_deref()).is_some()
            || non_blank(self.live_url.as_deref()).is_some()
    }
}

impl Experience {
    /// Label shown after the start date: "Present" for current roles.
    #[must_use]
    pub fn end_label(&self) -> &str {
        if self.current {
            "Present"
        } else {
            &self.end_date
        }
    }
}

impl Personal {
    /// First character of the name, used when no avatar image is set.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default()
    }
}

/// Treat a missing, empty or whitespace-only value as absent.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
