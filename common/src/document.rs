//! Document layout
//!
//! Turns the optimized resume text into a flat list of styled paragraph
//! descriptors. Rendering to an actual .docx is delegated to the platform
//! layer (the web crate hands these descriptors to a JavaScript bridge).

use serde::Serialize;

/// Title paragraph prepended to every exported document.
pub const DOCUMENT_TITLE: &str = "Optimized Resume";

/// Suggested file name for the browser download.
pub const DOWNLOAD_FILE_NAME: &str = "Optimized_Resume.docx";

/// Body font.
pub const BODY_FONT: &str = "Calibri";

/// Body size in half-points (22 = 11pt).
pub const BODY_SIZE_HALF_POINTS: u32 = 22;

/// Paragraph style, mapped to heading levels by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphStyle {
    Title,
    Heading,
    Body,
}

impl ParagraphStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParagraphStyle::Title => "title",
            ParagraphStyle::Heading => "heading",
            ParagraphStyle::Body => "body",
        }
    }
}

/// One styled paragraph. Spacing is in twentieths of a point (docx units).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocParagraph {
    pub text: String,
    pub style: ParagraphStyle,
    pub spacing_before: u32,
    pub spacing_after: u32,
}

/// Section-heading heuristic: a line that is entirely upper-case and between
/// 4 and 49 characters long. Everything else renders as a body paragraph.
pub fn is_section_heading(line: &str) -> bool {
    let len = line.chars().count();
    len > 3 && len < 50 && line.to_uppercase() == line
}

/// Split text into lines and lay them out, with the fixed document title
/// prepended.
pub fn layout_document(text: &str) -> Vec<DocParagraph> {
    let mut paragraphs = vec![DocParagraph {
        text: DOCUMENT_TITLE.to_string(),
        style: ParagraphStyle::Title,
        spacing_before: 0,
        spacing_after: 300,
    }];

    for line in text.split('\n') {
        if is_section_heading(line) {
            paragraphs.push(DocParagraph {
                text: line.to_string(),
                style: ParagraphStyle::Heading,
                spacing_before: 200,
                spacing_after: 100,
            });
        } else {
            paragraphs.push(DocParagraph {
                text: line.to_string(),
                style: ParagraphStyle::Body,
                spacing_before: 0,
                spacing_after: 100,
            });
        }
    }

    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // is_section_heading
    // =============================================

    #[test]
    fn test_heading_all_caps() {
        assert!(is_section_heading("SKILLS"));
        assert!(is_section_heading("PROFESSIONAL SUMMARY"));
    }

    #[test]
    fn test_body_mixed_case() {
        assert!(!is_section_heading("Built APIs."));
        assert!(!is_section_heading("Skills"));
    }

    #[test]
    fn test_heading_length_bounds() {
        assert!(!is_section_heading("ABC")); // 3 chars, too short
        assert!(is_section_heading("ABCD")); // 4 chars
        assert!(is_section_heading(&"A".repeat(49)));
        assert!(!is_section_heading(&"A".repeat(50))); // too long
    }

    #[test]
    fn test_empty_line_is_body() {
        assert!(!is_section_heading(""));
    }

    // =============================================
    // layout_document
    // =============================================

    #[test]
    fn test_layout_prepends_title() {
        let paragraphs = layout_document("line one");

        assert_eq!(paragraphs[0].text, DOCUMENT_TITLE);
        assert_eq!(paragraphs[0].style, ParagraphStyle::Title);
        assert_eq!(paragraphs[0].spacing_after, 300);
    }

    #[test]
    fn test_layout_heading_and_body() {
        let paragraphs = layout_document("SKILLS\nBuilt APIs.");

        assert_eq!(paragraphs.len(), 3); // title + 2 lines
        assert_eq!(paragraphs[1].text, "SKILLS");
        assert_eq!(paragraphs[1].style, ParagraphStyle::Heading);
        assert_eq!(paragraphs[1].spacing_before, 200);
        assert_eq!(paragraphs[1].spacing_after, 100);

        assert_eq!(paragraphs[2].text, "Built APIs.");
        assert_eq!(paragraphs[2].style, ParagraphStyle::Body);
        assert_eq!(paragraphs[2].spacing_before, 0);
        assert_eq!(paragraphs[2].spacing_after, 100);
    }

    #[test]
    fn test_layout_preserves_blank_lines() {
        let paragraphs = layout_document("EXPERIENCE\n\nShipped things.");

        assert_eq!(paragraphs.len(), 4);
        assert_eq!(paragraphs[2].text, "");
        assert_eq!(paragraphs[2].style, ParagraphStyle::Body);
    }

    #[test]
    fn test_layout_serializes_camel_case() {
        let paragraphs = layout_document("SKILLS");
        let json = serde_json::to_string(&paragraphs).expect("serialize failed");

        assert!(json.contains("\"spacingBefore\":200"));
        assert!(json.contains("\"spacingAfter\":100"));
        assert!(json.contains("\"style\":\"heading\""));
    }

    #[test]
    fn test_style_as_str() {
        assert_eq!(ParagraphStyle::Title.as_str(), "title");
        assert_eq!(ParagraphStyle::Heading.as_str(), "heading");
        assert_eq!(ParagraphStyle::Body.as_str(), "body");
    }
}
