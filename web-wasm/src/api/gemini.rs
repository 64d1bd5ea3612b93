//! Gemini API client
//!
//! Two calls against the same endpoint:
//! - analyze_match: resume + job description PDFs -> MatchResult
//! - optimize_resume: extracted text + missing keywords -> OptimizationResult
//!
//! Each call is a single attempt; any failure (network, non-2xx, empty or
//! unparseable reply) propagates to the caller.

use resume_match_common::{
    analysis_schema, build_optimization_prompt, optimization_schema, parse_match_response,
    parse_optimization_response, MatchResult, OptimizationResult, ANALYSIS_PROMPT,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::app::UploadedDocument;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Gemini API request
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

/// Gemini API response
#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

/// Extract the base64 payload of a data URL.
///
/// # Arguments
/// * `data_url` - "data:application/pdf;base64,JVBERi..." style data URL
///
/// # Returns
/// The base64 portion, or None when the URL has no comma separator.
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Extract the media type of a data URL.
///
/// # Arguments
/// * `data_url` - "data:application/pdf;base64,..." style data URL
///
/// # Returns
/// The media type, defaulting to "application/pdf" when absent.
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .filter(|s| !s.is_empty())
        .unwrap_or("application/pdf")
}

/// Build the inline-data part for one uploaded document.
fn inline_data_part(document: &UploadedDocument) -> Result<Part, JsValue> {
    let data = extract_base64_from_data_url(&document.data_url)
        .ok_or_else(|| JsValue::from_str("Invalid data URL"))?;
    let mime_type = extract_mime_type_from_data_url(&document.data_url);

    Ok(Part::InlineData {
        inline_data: InlineData {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        },
    })
}

/// POST a request to the Gemini API and return the first candidate text.
async fn call_gemini_api(api_key: &str, request: &GeminiRequest) -> Result<String, JsValue> {
    let url = format!("{}?key={}", GEMINI_API_URL, api_key);
    let body = serde_json::to_string(request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(&JsValue::from_str(&body)));

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;

    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| JsValue::from_str("Empty response"))
}

/// Run the analysis call: both PDFs as inline data plus the fixed prompt,
/// with the analysis schema enforced on the reply.
pub async fn analyze_match(
    api_key: &str,
    resume: &UploadedDocument,
    jd: &UploadedDocument,
) -> Result<MatchResult, JsValue> {
    let parts = vec![
        inline_data_part(resume)?,
        inline_data_part(jd)?,
        Part::Text {
            text: ANALYSIS_PROMPT.to_string(),
        },
    ];

    let request = GeminiRequest {
        contents: vec![Content { parts }],
        generation_config: GenerationConfig {
            temperature: 0.1,
            response_mime_type: "application/json".to_string(),
            response_schema: analysis_schema(),
        },
    };

    let response_text = call_gemini_api(api_key, &request).await?;

    parse_match_response(&response_text)
        .map_err(|e| JsValue::from_str(&format!("Analysis parse error: {}", e)))
}

/// Run the optimization call: text-only prompt carrying the extracted resume
/// and the missing keywords, with the optimization schema enforced.
pub async fn optimize_resume(
    api_key: &str,
    current_text: &str,
    missing_keywords: &[String],
) -> Result<OptimizationResult, JsValue> {
    let prompt = build_optimization_prompt(current_text, missing_keywords);

    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![Part::Text { text: prompt }],
        }],
        generation_config: GenerationConfig {
            temperature: 0.1,
            response_mime_type: "application/json".to_string(),
            response_schema: optimization_schema(),
        },
    };

    let response_text = call_gemini_api(api_key, &request).await?;

    parse_optimization_response(&response_text)
        .map_err(|e| JsValue::from_str(&format!("Optimization parse error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Data URL helpers
    // =============================================

    #[test]
    fn test_extract_base64_from_data_url_pdf() {
        let data_url = "data:application/pdf;base64,JVBERi0xLjQ=";
        assert_eq!(
            extract_base64_from_data_url(data_url),
            Some("JVBERi0xLjQ=")
        );
    }

    #[test]
    fn test_extract_base64_from_data_url_invalid() {
        assert_eq!(extract_base64_from_data_url("not a data url"), None);
        assert_eq!(extract_base64_from_data_url(""), None);
    }

    #[test]
    fn test_extract_mime_type_pdf() {
        let data_url = "data:application/pdf;base64,JVBERi0xLjQ=";
        assert_eq!(extract_mime_type_from_data_url(data_url), "application/pdf");
    }

    #[test]
    fn test_extract_mime_type_default() {
        assert_eq!(extract_mime_type_from_data_url("invalid"), "application/pdf");
        assert_eq!(
            extract_mime_type_from_data_url("data:;base64,aaaa"),
            "application/pdf"
        );
    }

    // =============================================
    // Request/response serialization
    // =============================================

    #[test]
    fn test_gemini_request_serialize() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: "test prompt".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.1,
                response_mime_type: "application/json".to_string(),
                response_schema: resume_match_common::analysis_schema(),
            },
        };

        let json = serde_json::to_string(&request).expect("serialize failed");
        assert!(json.contains("\"contents\""));
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"temperature\":0.1"));
        assert!(json.contains("\"responseMimeType\":\"application/json\""));
        assert!(json.contains("\"responseSchema\""));
        assert!(json.contains("\"missingKeywords\""));
    }

    #[test]
    fn test_part_text_serialize() {
        let part = Part::Text {
            text: "Hello".to_string(),
        };
        let json = serde_json::to_string(&part).expect("serialize failed");
        assert_eq!(json, r#"{"text":"Hello"}"#);
    }

    #[test]
    fn test_part_inline_data_serialize() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "application/pdf".to_string(),
                data: "JVBERi0xLjQ=".to_string(),
            },
        };
        let json = serde_json::to_string(&part).expect("serialize failed");
        assert!(json.contains("\"inline_data\""));
        assert!(json.contains("\"mime_type\":\"application/pdf\""));
        assert!(json.contains("\"data\":\"JVBERi0xLjQ=\""));
    }

    #[test]
    fn test_inline_data_part_from_document() {
        let document = UploadedDocument {
            file_name: "resume.pdf".to_string(),
            data_url: "data:application/pdf;base64,JVBERi0xLjQ=".to_string(),
        };

        let part = inline_data_part(&document).expect("part conversion failed");
        let json = serde_json::to_string(&part).expect("serialize failed");
        assert!(json.contains("JVBERi0xLjQ="));
        assert!(json.contains("application/pdf"));
    }

    #[test]
    fn test_inline_data_part_rejects_bad_url() {
        let document = UploadedDocument {
            file_name: "resume.pdf".to_string(),
            data_url: "garbage".to_string(),
        };

        assert!(inline_data_part(&document).is_err());
    }

    #[test]
    fn test_gemini_response_deserialize() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "{\"score\": 80}"
                    }]
                }
            }]
        }"#;

        let response: GeminiResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.candidates.len(), 1);
        assert!(response.candidates[0].content.parts[0]
            .text
            .contains("score"));
    }
}
