//! JavaScript bridge bindings
//!
//! Bindings for calling JavaScript from Rust WASM. The .docx packing is
//! delegated to the docx library on the JavaScript side; Rust only produces
//! the paragraph descriptors.

use resume_match_common::{DocParagraph, ParagraphStyle, BODY_FONT, BODY_SIZE_HALF_POINTS};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================
// Data types
// ============================================

/// Paragraph descriptor handed to the JavaScript side
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsParagraph {
    pub text: String,
    pub style: &'static str,
    pub spacing_before: u32,
    pub spacing_after: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl From<&DocParagraph> for JsParagraph {
    fn from(paragraph: &DocParagraph) -> Self {
        // headings use the document styles; only body runs carry font/size
        let (font, size) = match paragraph.style {
            ParagraphStyle::Body => (Some(BODY_FONT), Some(BODY_SIZE_HALF_POINTS)),
            ParagraphStyle::Title | ParagraphStyle::Heading => (None, None),
        };

        Self {
            text: paragraph.text.clone(),
            style: paragraph.style.as_str(),
            spacing_before: paragraph.spacing_before,
            spacing_after: paragraph.spacing_after,
            font,
            size,
        }
    }
}

// ============================================
// JavaScript extern declarations
// ============================================

#[wasm_bindgen(module = "/js/docx-bridge.js")]
extern "C" {
    /// Build a .docx on the JavaScript side
    ///
    /// # Arguments
    /// * `paragraphs_json` - JSON string of a JsParagraph array
    ///
    /// # Returns
    /// The document bytes (Uint8Array)
    #[wasm_bindgen(js_name = "generateDocx", catch)]
    pub async fn generate_docx_js(paragraphs_json: &str) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen(module = "/js/download.js")]
extern "C" {
    /// Trigger a browser download of the document
    ///
    /// # Arguments
    /// * `data` - document bytes
    /// * `filename` - suggested download file name
    #[wasm_bindgen(js_name = "downloadDocx")]
    pub fn download_docx_js(data: &[u8], filename: &str);
}

// ============================================
// Helpers
// ============================================

/// Serialize paragraph descriptors for the bridge call.
pub fn paragraphs_to_json(paragraphs: &[DocParagraph]) -> Result<String, String> {
    let entries: Vec<JsParagraph> = paragraphs.iter().map(JsParagraph::from).collect();
    serde_json::to_string(&entries).map_err(|e| format!("JSON serialization failed: {}", e))
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use resume_match_common::layout_document;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_paragraphs_to_json_includes_styles() {
        let paragraphs = layout_document("SKILLS\nBuilt APIs.");
        let json = paragraphs_to_json(&paragraphs).expect("JSON conversion failed");
        assert!(json.contains("\"style\":\"heading\""));
        assert!(json.contains("\"style\":\"body\""));
    }
}
