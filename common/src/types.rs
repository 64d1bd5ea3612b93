//! Result type definitions
//!
//! Shared by the Gemini client and the view layer:
//! - MatchResult: output of the analysis call
//! - OptimizationResult: output of the optimization call
//!
//! Field names follow the camelCase keys of the structured-output schemas,
//! so the model replies deserialize directly.

use serde::{Deserialize, Serialize};

/// Analysis reply: compatibility score and gap analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchResult {
    /// Match score, 0-100
    pub score: u8,
    /// Keywords found in the job description but missing from the resume
    pub missing_keywords: Vec<String>,
    /// Concise gap analysis summary
    pub summary_analysis: String,
    /// Full plain-text content of the resume, kept for the rewrite step
    pub extracted_resume_text: String,
}

/// Optimization reply: rewritten resume and change summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationResult {
    pub optimized_text: String,
    pub changes_made: String,
}
