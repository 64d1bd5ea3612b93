//! Structured-output schemas
//!
//! Gemini enforces these via `generationConfig.responseSchema`, so a
//! well-behaved reply deserializes straight into the types in `types.rs`.

use serde_json::{json, Value};

/// Schema for the analysis call: score, missing keywords, gap summary,
/// extracted resume text. All fields required.
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": {
                "type": "INTEGER",
                "description": "Match score between 0 and 100"
            },
            "missingKeywords": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of important keywords found in JD but missing in Resume"
            },
            "summaryAnalysis": {
                "type": "STRING",
                "description": "A concise gap analysis summary"
            },
            "extractedResumeText": {
                "type": "STRING",
                "description": "The full plain text content of the resume"
            }
        },
        "required": ["score", "missingKeywords", "summaryAnalysis", "extractedResumeText"]
    })
}

/// Schema for the optimization call: rewritten text plus change summary.
pub fn optimization_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "optimizedText": {
                "type": "STRING",
                "description": "The full rewritten resume text"
            },
            "changesMade": {
                "type": "STRING",
                "description": "Brief explanation of what was changed"
            }
        },
        "required": ["optimizedText", "changesMade"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_schema_requires_all_fields() {
        let schema = analysis_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(
            required,
            ["score", "missingKeywords", "summaryAnalysis", "extractedResumeText"]
        );
    }

    #[test]
    fn test_analysis_schema_field_types() {
        let schema = analysis_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["score"]["type"], "INTEGER");
        assert_eq!(schema["properties"]["missingKeywords"]["type"], "ARRAY");
        assert_eq!(
            schema["properties"]["missingKeywords"]["items"]["type"],
            "STRING"
        );
    }

    #[test]
    fn test_optimization_schema_requires_all_fields() {
        let schema = optimization_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert_eq!(required, ["optimizedText", "changesMade"]);
        assert_eq!(schema["properties"]["optimizedText"]["type"], "STRING");
    }
}
