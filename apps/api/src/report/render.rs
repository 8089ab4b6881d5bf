//! Markdown rendering of a stored report.

use std::fmt::{self, Write};

use crate::analysis::ats::AtsCategory;
use crate::analysis::formatter::RecommendationCategory;
use crate::report::StoredReport;

const CATEGORY_ORDER: &[RecommendationCategory] = &[
    RecommendationCategory::Certification,
    RecommendationCategory::Project,
    RecommendationCategory::Skill,
    RecommendationCategory::General,
];

const ATS_ROWS: &[(AtsCategory, &str)] = &[
    (AtsCategory::Structure, "Structure"),
    (AtsCategory::Formatting, "Formatting"),
    (AtsCategory::KeywordDensity, "Keyword density"),
    (AtsCategory::Contact, "Contact"),
];

pub fn render_markdown(report: &StoredReport) -> Result<String, fmt::Error> {
    let result = &report.result;
    let mut out = String::new();

    writeln!(out, "# Skill Gap Report: {}", report.job_role)?;
    writeln!(out)?;
    writeln!(out, "- Report ID: `{}`", report.id)?;
    writeln!(
        out,
        "- Generated: {}",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    )?;
    writeln!(out, "- Match: **{:.2}%**", result.match_percentage)?;
    writeln!(
        out,
        "- Estimated time saved: {} minutes",
        result.estimated_time_saved_minutes
    )?;

    write_skill_list(&mut out, "Matched Skills", &result.matched_skills)?;
    write_skill_list(&mut out, "Missing Skills", &result.missing_skills)?;

    writeln!(out)?;
    writeln!(out, "## Recommendations")?;
    if result.recommendations.is_empty() {
        writeln!(out)?;
        writeln!(out, "_None_")?;
    }
    for category in CATEGORY_ORDER {
        let items: Vec<&str> = result
            .recommendations
            .iter()
            .filter(|r| r.category == *category)
            .map(|r| r.text.as_str())
            .collect();
        if items.is_empty() {
            continue;
        }
        writeln!(out)?;
        writeln!(out, "### {}", category.label())?;
        writeln!(out)?;
        for (i, text) in items.iter().enumerate() {
            writeln!(out, "{}. {text}", i + 1)?;
        }
    }

    if let Some(ats) = &result.ats_score {
        writeln!(out)?;
        writeln!(out, "## ATS Score: {:.1} ({})", ats.overall, ats.grade)?;
        writeln!(out)?;
        writeln!(out, "| Category | Score |")?;
        writeln!(out, "|---|---|")?;
        for (category, label) in ATS_ROWS {
            writeln!(out, "| {label} | {:.1} |", ats.sub_score(*category))?;
        }
        if !ats.recommendations.is_empty() {
            writeln!(out)?;
            for advisory in &ats.recommendations {
                writeln!(out, "- {advisory}")?;
            }
        }
    }

    Ok(out)
}

fn write_skill_list(out: &mut String, title: &str, skills: &[String]) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "## {title}")?;
    writeln!(out)?;
    if skills.is_empty() {
        writeln!(out, "_None_")?;
    } else {
        for skill in skills {
            writeln!(out, "- {skill}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::analysis::ats::score_ats;
    use crate::analysis::matching::match_skills;
    use crate::analysis::result::assemble_result;

    fn stored(with_ats: bool) -> StoredReport {
        let result = assemble_result(
            match_skills(&["python", "docker"], &["Python", "Kubernetes", "Docker"]),
            with_ats.then(|| score_ats("Email: a@b.com\nExperience", "python docker")),
            "1. Take a Kubernetes course\n2. Build a Kubernetes project\n3. Network at meetups",
        );
        StoredReport {
            id: Uuid::new_v4(),
            job_role: "DevOps Engineer".to_string(),
            generated_at: Utc::now(),
            result,
        }
    }

    #[test]
    fn test_renders_core_sections() {
        let report = stored(false);
        let md = render_markdown(&report).unwrap();

        assert!(md.starts_with("# Skill Gap Report: DevOps Engineer"));
        assert!(md.contains(&report.id.to_string()));
        assert!(md.contains("- Match: **66.67%**"));
        assert!(md.contains("## Matched Skills\n\n- docker\n- python\n"));
        assert!(md.contains("## Missing Skills\n\n- Kubernetes\n"));
        assert!(md.contains("### Certifications & Courses\n\n1. Take a Kubernetes course"));
        assert!(md.contains("### Projects\n\n1. Build a Kubernetes project"));
        assert!(md.contains("### General\n\n1. Network at meetups"));
        assert!(!md.contains("## ATS Score"));
    }

    #[test]
    fn test_renders_ats_table() {
        let md = render_markdown(&stored(true)).unwrap();
        assert!(md.contains("## ATS Score: "));
        assert!(md.contains("| Keyword density | "));
        assert!(md.contains("| Contact | "));
    }

    #[test]
    fn test_empty_lists_render_none() {
        let mut report = stored(false);
        report.result.matched_skills.clear();
        report.result.recommendations.clear();
        let md = render_markdown(&report).unwrap();
        assert!(md.contains("## Matched Skills\n\n_None_"));
        assert!(md.contains("## Recommendations\n\n_None_"));
    }
}
