//! Job-skill extraction: lexicon hits as written in the job description.

use crate::extraction::lexicon::scan;
use crate::extraction::JobSkillExtractor;

/// Returns mentions in order of appearance with their original casing.
/// Duplicates are kept; the match engine collapses them by canonical key.
pub struct LexiconJobSkillExtractor;

impl JobSkillExtractor for LexiconJobSkillExtractor {
    fn extract(&self, job_description: &str) -> Vec<String> {
        scan(job_description)
            .into_iter()
            .map(|hit| hit.mention)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::matching::match_skills;
    use crate::extraction::job_roles::find_description;

    #[test]
    fn test_mentions_keep_casing_and_duplicates() {
        let skills = LexiconJobSkillExtractor
            .extract("Docker and Kubernetes required. DOCKER experience is a plus.");
        assert_eq!(skills, vec!["Docker", "Kubernetes", "DOCKER"]);
    }

    #[test]
    fn test_catalogue_description() {
        let description = find_description("DevOps Engineer").unwrap();
        let skills = LexiconJobSkillExtractor.extract(description);
        let expected = [
            "Docker",
            "Kubernetes",
            "Jenkins",
            "Terraform",
            "CI/CD",
            "Python",
            "Bash",
        ];
        for skill in expected {
            assert!(skills.iter().any(|s| s == skill), "missing {skill}: {skills:?}");
        }
    }

    #[test]
    fn test_generic_words_are_not_skills() {
        let skills = LexiconJobSkillExtractor
            .extract("Software Developer with experience in databases and pipelines");
        assert!(skills.is_empty(), "{skills:?}");
    }

    #[test]
    fn test_prose_verbs_do_not_become_requirements() {
        let skills = LexiconJobSkillExtractor
            .extract("You will go the extra mile with Python; swift delivery matters.");
        assert_eq!(skills, vec!["Python"]);

        let result = match_skills(&["python"], &skills);
        assert_eq!(result.match_percentage, 100.0);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_description() {
        assert!(LexiconJobSkillExtractor.extract("").is_empty());
    }
}
