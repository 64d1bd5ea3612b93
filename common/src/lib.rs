//! Resume Match Common Library
//!
//! Types and logic shared by the web (WASM) front end, kept free of browser
//! dependencies so everything here runs under native `cargo test`.

pub mod document;
pub mod error;
pub mod parser;
pub mod prompts;
pub mod schema;
pub mod session;
pub mod types;

pub use document::{
    is_section_heading, layout_document, DocParagraph, ParagraphStyle, BODY_FONT,
    BODY_SIZE_HALF_POINTS, DOCUMENT_TITLE, DOWNLOAD_FILE_NAME,
};
pub use error::{Error, Result};
pub use parser::{extract_json, parse_match_response, parse_optimization_response};
pub use prompts::{build_optimization_prompt, ANALYSIS_PROMPT};
pub use schema::{analysis_schema, optimization_schema};
pub use session::{AnalysisStatus, Session};
pub use types::{MatchResult, OptimizationResult};
