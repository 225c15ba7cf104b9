//! Portfolio document validation.
//!
//! Structural problems the JSON schema cannot express are rejected here.
//! Softer issues are reported as [`Finding`]s for `vitae check`.

use std::collections::HashSet;

use crate::portfolio::{Portfolio, non_blank};

/// Reject documents the renderer cannot display correctly.
///
/// Returns a human-readable message for the first violation found.
pub fn validate_portfolio(portfolio: &Portfolio) -> Result<(), String> {
    if portfolio.personal.name.trim().is_empty() {
        return Err("personal.name cannot be blank".into());
    }

    check_unique_ids("projects", portfolio.projects.iter().map(|p| p.id))?;
    check_unique_ids("experience", portfolio.experience.iter().map(|e| e.id))?;
    check_unique_ids("education", portfolio.education.iter().map(|e| e.id))?;
    check_unique_ids("achievements", portfolio.achievements.iter().map(|a| a.id))?;

    Ok(())
}

/// Ensure every identifier in a list appears once.
fn check_unique_ids(list: &str, ids: impl Iterator<Item = u64>) -> Result<(), String> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(format!("duplicate id {id} in {list}"));
        }
    }
    Ok(())
}

/// A non-fatal observation about a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Dotted path of the offending field, e.g. `projects[2]`.
    pub location: String,
    pub message: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Collect soft issues: things that render fine but probably are not intended.
#[must_use]
pub fn lint_portfolio(portfolio: &Portfolio) -> Vec<Finding> {
    let mut findings = Vec::new();
    let personal = &portfolio.personal;
    let social = &personal.social;

    let has_any_link = [
        Some(personal.email.as_str()),
        social.github.as_deref(),
        social.linkedin.as_deref(),
        social.twitter.as_deref(),
        social.website.as_deref(),
    ]
    .into_iter()
    .any(|v| non_blank(v).is_some());

    if !has_any_link {
        findings.push(Finding {
            location: "personal".into(),
            message: "no email or social links; visitors have no way to reach you".into(),
        });
    }

    if non_blank(social.github.as_deref()).is_some()
        && non_blank(personal.username.as_deref()).is_none()
    {
        findings.push(Finding {
            location: "personal.username".into(),
            message: "GitHub link is set but username is empty; contact entry will read \"@\""
                .into(),
        });
    }

    for (index, project) in portfolio.projects.iter().enumerate() {
        if !project.has_links() {
            findings.push(Finding {
                location: format!("projects[{index}]"),
                message: format!("project \"{}\" has neither githubUrl nor liveUrl", project.name),
            });
        }
    }

    for (category, skills) in &portfolio.skills {
        if skills.is_empty() {
            findings.push(Finding {
                location: format!("skills.{category}"),
                message: "category has no skills".into(),
            });
        }
    }

    for (index, exp) in portfolio.experience.iter().enumerate() {
        if !exp.current && exp.end_date.trim().is_empty() {
            findings.push(Finding {
                location: format!("experience[{index}]"),
                message: "endDate is empty and current is false".into(),
            });
        }
    }

    findings
}
