//! Experience section: work timeline, education, and certifications.

use vitae_core::{Achievement, Education, Experience};

use super::{Section, icon};
use crate::template::escape_html;

fn render_role(role: &Experience) -> String {
    let responsibilities = if role.responsibilities.is_empty() {
        String::new()
    } else {
        let items: String = role
            .responsibilities
            .iter()
            .map(|r| format!("<li>{}</li>", escape_html(r)))
            .collect();
        format!(r#"<ul class="responsibilities">{items}</ul>"#)
    };

    format!(
        r#"<div class="timeline-item card">
    <h3>{position}</h3>
    <h4>{company}</h4>
    <div class="timeline-meta muted">
        <span>{calendar}{start} - {end}</span>
        <span>{pin}{location}</span>
    </div>
    <p>{description}</p>
    {responsibilities}
</div>"#,
        position = escape_html(&role.position),
        company = escape_html(&role.company),
        calendar = icon("calendar"),
        start = escape_html(&role.start_date),
        end = escape_html(role.end_label()),
        pin = icon("map-pin"),
        location = escape_html(&role.location),
        description = escape_html(&role.description),
    )
}

fn render_education(education: &[Education]) -> String {
    if education.is_empty() {
        return String::new();
    }

    let items: String = education
        .iter()
        .map(|e| {
            format!(
                r#"<div class="card education-item">
    <h4>{degree} in {field}</h4>
    <p>{institution}</p>
    <p class="muted">{start} - {end}</p>
    <p class="muted">{location}</p>
    <p>{description}</p>
</div>"#,
                degree = escape_html(&e.degree),
                field = escape_html(&e.field),
                institution = escape_html(&e.institution),
                start = escape_html(&e.start_date),
                end = escape_html(&e.end_date),
                location = escape_html(&e.location),
                description = escape_html(&e.description),
            )
        })
        .collect();

    format!(
        r#"<div class="education-block"><h3>{}Education</h3>{items}</div>"#,
        icon("graduation-cap")
    )
}

fn render_achievements(achievements: &[Achievement]) -> String {
    if achievements.is_empty() {
        return String::new();
    }

    let items: String = achievements
        .iter()
        .map(|a| {
            format!(
                r#"<div class="card achievement-item">
    <h4>{title}</h4>
    <p>{issuer}</p>
    <p class="muted">{date}</p>
    <p>{description}</p>
</div>"#,
                title = escape_html(&a.title),
                issuer = escape_html(&a.issuer),
                date = escape_html(&a.date),
                description = escape_html(&a.description),
            )
        })
        .collect();

    format!(
        r#"<div class="achievements-block"><h3>{}Certifications &amp; Achievements</h3>{items}</div>"#,
        icon("award")
    )
}

/// Render the experience section.
///
/// Roles appear in document order. The education and achievements blocks are
/// omitted entirely when their lists are empty.
pub fn render_experience(
    experience: &[Experience],
    education: &[Education],
    achievements: &[Achievement],
) -> Section {
    let timeline: String = experience.iter().map(render_role).collect();

    let body = format!(
        r#"<div class="timeline">{timeline}</div>
<div class="grid experience-extras">{education}{achievements}</div>"#,
        education = render_education(education),
        achievements = render_achievements(achievements),
    );

    Section {
        id: "experience",
        heading: "Experience & Education",
        subtitle: Some("My professional journey and continuous learning path"),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(current: bool, end_date: &str) -> Experience {
        Experience {
            id: 1,
            company: "Initech".into(),
            position: "Engineer".into(),
            location: "Austin".into(),
            start_date: "Jan 2020".into(),
            end_date: end_date.into(),
            current,
            description: "TPS reports".into(),
            responsibilities: vec![],
        }
    }

    #[test]
    fn test_current_role_reads_present() {
        let section = render_experience(&[role(true, "")], &[], &[]);
        assert!(section.body.contains("Jan 2020 - Present"));
    }

    #[test]
    fn test_past_role_reads_end_date() {
        let section = render_experience(&[role(false, "Mar 2023")], &[], &[]);
        assert!(section.body.contains("Jan 2020 - Mar 2023"));
        assert!(!section.body.contains("Present"));
    }

    #[test]
    fn test_empty_blocks_omitted() {
        let section = render_experience(&[role(true, "")], &[], &[]);

        assert!(!section.body.contains("Education</h3>"));
        assert!(!section.body.contains("Certifications"));
        assert!(!section.body.contains("responsibilities"));
    }

    #[test]
    fn test_education_and_achievements_rendered() {
        let education = Education {
            id: 1,
            institution: "State University".into(),
            degree: "BSc".into(),
            field: "Computer Science".into(),
            location: "Springfield".into(),
            start_date: "2012".into(),
            end_date: "2016".into(),
            description: "Systems track".into(),
        };
        let achievement = Achievement {
            id: 1,
            title: "Certified Kubernetes Administrator".into(),
            issuer: "CNCF".into(),
            date: "2022".into(),
            description: "Cluster operations".into(),
        };
        let mut r = role(true, "");
        r.responsibilities = vec!["Ship".into(), "Review".into()];

        let section = render_experience(&[r], &[education], &[achievement]);

        assert!(section.body.contains("BSc in Computer Science"));
        assert!(section.body.contains("Certifications &amp; Achievements"));
        assert!(section.body.contains("Certified Kubernetes Administrator"));
        assert_eq!(section.body.matches("<li>").count(), 2);
    }
}
