//! .docx generation (WASM)
//!
//! Lays out the optimized text and delegates packing to the docx library via
//! the JavaScript bridge.

use resume_match_common::{layout_document, DOWNLOAD_FILE_NAME};

use crate::export::js_bindings::{download_docx_js, generate_docx_js, paragraphs_to_json};

/// Generate the .docx and return its bytes.
pub async fn generate_docx(text: &str) -> Result<Vec<u8>, String> {
    let paragraphs = layout_document(text);
    let paragraphs_json = paragraphs_to_json(&paragraphs)?;

    let result = generate_docx_js(&paragraphs_json)
        .await
        .map_err(|e| format!("Docx generation failed: {:?}", e))?;

    let array = js_sys::Uint8Array::new(&result);
    Ok(array.to_vec())
}

/// Generate the .docx and trigger a browser download.
pub async fn export_docx(text: &str) -> Result<(), String> {
    let bytes = generate_docx(text).await?;
    download_docx_js(&bytes, DOWNLOAD_FILE_NAME);
    Ok(())
}
