// Prompt constants for recommendation generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Recommendation prompt template. Replace every `{placeholder}` before sending.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"The user wants to apply for the following role:
{job_description}

Their current resume skills:
{resume_skills}

Matched skills:
{matched_skills}

Missing skills:
{missing_skills}

Provide exactly 3 legitimate, actionable recommendations to help the user improve their resume and skill set, focusing on bridging the missing skills.
Write one recommendation per line, numbered "1.", "2.", "3.". Be concise but complete.

Expected output format:
1. Add personal projects using Docker and Kubernetes to your resume.
2. Highlight cloud experience and certification (e.g., AWS Certified Solutions Architect).
3. Take an online Docker/Kubernetes course on platforms like Coursera or Udemy to improve technical expertise."#;

/// Rendered in place of an empty skill list.
pub const NONE_LISTED: &str = "(none)";
