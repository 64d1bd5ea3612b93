//! Prompt builders
//!
//! Fixed instruction text for the two Gemini calls:
//! - ANALYSIS_PROMPT: score + gap analysis + resume text extraction
//! - build_optimization_prompt: keyword-closing rewrite

/// Instruction sent alongside the two PDF parts of an analysis call.
pub const ANALYSIS_PROMPT: &str = "\
You are an expert Applicant Tracking System (ATS) optimization specialist.
Analyze the attached Resume and Job Description.

Tasks:
1. Calculate a match score (0-100) based on keyword overlap, skill matching, and relevance.
2. Identify critical keywords/skills present in the Job Description but missing from the Resume.
3. Provide a brief analysis of the gap.
4. Extract the full text of the resume so it can be rewritten later.
";

/// Optimization prompt. The missing keywords are forwarded verbatim,
/// comma-separated, followed by the resume text from the analysis step.
pub fn build_optimization_prompt(current_text: &str, missing_keywords: &[String]) -> String {
    format!(
        "\
You are a professional resume writer.

Task: Rewrite the provided resume text to naturally incorporate the following missing keywords, WITHOUT inventing fake experience.
Focus heavily on optimizing the \"Professional Summary\" and \"Skills\" sections to close the gap.
Ensure the tone remains professional and the structure is preserved.

Missing Keywords to add: {}

Original Resume Text:
{}",
        missing_keywords.join(", "),
        current_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_lists_tasks() {
        assert!(ANALYSIS_PROMPT.contains("match score (0-100)"));
        assert!(ANALYSIS_PROMPT.contains("missing from the Resume"));
        assert!(ANALYSIS_PROMPT.contains("Extract the full text of the resume"));
    }

    #[test]
    fn test_optimization_prompt_contains_keywords_verbatim() {
        let keywords = vec![
            "Kubernetes".to_string(),
            "CI/CD".to_string(),
            "Terraform".to_string(),
        ];
        let prompt = build_optimization_prompt("EXPERIENCE\nBuilt APIs.", &keywords);

        // every keyword must survive the trip into the request payload
        for keyword in &keywords {
            assert!(prompt.contains(keyword), "missing keyword: {keyword}");
        }
        assert!(prompt.contains("Kubernetes, CI/CD, Terraform"));
    }

    #[test]
    fn test_optimization_prompt_contains_resume_text() {
        let prompt = build_optimization_prompt("Jane Doe\nSKILLS\nRust", &[]);
        assert!(prompt.contains("Jane Doe\nSKILLS\nRust"));
    }

    #[test]
    fn test_optimization_prompt_empty_keywords() {
        let prompt = build_optimization_prompt("text", &[]);
        assert!(prompt.contains("Missing Keywords to add: \n"));
    }
}
