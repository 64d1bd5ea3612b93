//! Reply parsers
//!
//! Extracts the JSON object from a model reply and parses it into the typed
//! results. Both Gemini calls are configured for JSON output, but replies may
//! still arrive wrapped in a fenced block or surrounding prose.

use crate::error::{Error, Result};
use crate::types::{MatchResult, OptimizationResult};

/// Extract the JSON object portion of a reply.
///
/// Extraction order:
/// 1. ```json ... ``` fenced block
/// 2. outermost {...} object
/// 3. error
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // length of "```json"
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("no JSON object in response".into()))
}

/// Parse an analysis reply into a MatchResult.
///
/// The schema already bounds the score, but the stored value is clamped to
/// 0-100 so downstream rendering never sees an out-of-range score.
pub fn parse_match_response(response: &str) -> Result<MatchResult> {
    let json_str = extract_json(response)?;
    let mut result: MatchResult = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("analysis reply: {}", e)))?;
    result.score = result.score.min(100);
    Ok(result)
}

/// Parse an optimization reply into an OptimizationResult.
pub fn parse_optimization_response(response: &str) -> Result<OptimizationResult> {
    let json_str = extract_json(response)?;
    serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("optimization reply: {}", e)))
}
