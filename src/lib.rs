//! # wordhtml
//!
//! HTML export for word-processing documents.
//!
//! This library turns an in-memory document model (sections, paragraphs,
//! runs, tables, images, notes) into a standalone HTML page with a
//! generated stylesheet and base64-embedded images.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wordhtml::{render, Document, Text};
//!
//! fn main() -> wordhtml::Result<()> {
//!     let mut doc = Document::new();
//!     doc.add_section()
//!         .add_title("Report", 1)
//!         .add_element(Text::new("Hello & welcome"));
//!
//!     let html = render::to_html(&doc, &render::HtmlOptions::default())?;
//!     std::fs::write("report.html", html)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Named and inline styles**: registered styles become stylesheet rules,
//!   inline styles become `style` attributes
//! - **Embedded images**: files, generated bitmaps and zip archive entries
//!   as data URIs
//! - **Best effort**: unsupported content becomes a visible placeholder,
//!   never an error
//! - **Parallel batches**: Rayon renders many documents at once

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Alignment, Bitmap, BitmapFormat, Cell, Document, DocumentProperties, Element, FontStyle,
    Image, ImageSource, InlineElement, Link, ListItem, ParagraphStyle, Row, Section, Style,
    StyleRef, StyleRegistry, Table, Text, TextRun, Title,
};
pub use render::{HtmlOptions, HtmlWriter, JsonFormat, RenderResult, RenderStats};

use std::path::Path;

/// Convert a document to HTML with default options.
///
/// # Example
///
/// ```
/// use wordhtml::{to_html, Document};
///
/// let mut doc = Document::new();
/// doc.add_section().add_text("Hello");
/// let html = to_html(&doc).unwrap();
/// assert!(html.contains("<p>Hello</p>"));
/// ```
pub fn to_html(doc: &Document) -> Result<String> {
    render::to_html(doc, &HtmlOptions::default())
}

/// Convert a document to HTML with custom options.
pub fn to_html_with_options(doc: &Document, options: &HtmlOptions) -> Result<String> {
    render::to_html(doc, options)
}

/// Load a document model from a JSON file.
///
/// # Example
///
/// ```no_run
/// use wordhtml::load_document;
///
/// let doc = load_document("report.json").unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let json = std::fs::read_to_string(path)?;
    render::from_json(&json)
}

/// Load a JSON document model and convert it to HTML.
///
/// # Example
///
/// ```no_run
/// use wordhtml::{convert_file, HtmlOptions};
///
/// let html = convert_file("report.json", &HtmlOptions::new().for_pdf()).unwrap();
/// std::fs::write("report.html", html).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P, options: &HtmlOptions) -> Result<String> {
    let doc = load_document(path)?;
    render::to_html(&doc, options)
}

/// Convert several documents in parallel with the same options.
pub fn to_html_batch(docs: &[Document], options: &HtmlOptions) -> Vec<Result<String>> {
    render::to_html_batch(docs, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html_default_options() {
        let mut doc = Document::new();
        doc.add_section().add_text("Hello");
        let html = to_html(&doc).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>untitled</title>"));
        assert!(html.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_load_document_missing_file() {
        let result = load_document("/nonexistent/document.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(
            &path,
            r#"{"properties": {"title": "From JSON"},
                "sections": [{"elements": [{"type": "title", "text": "Hi", "depth": 2}]}]}"#,
        )
        .unwrap();

        let html = convert_file(&path, &HtmlOptions::default()).unwrap();
        assert!(html.contains("<title>From JSON</title>"));
        assert!(html.contains("<h2>Hi</h2>"));
    }

    #[test]
    fn test_convert_file_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, "[1, 2").unwrap();

        assert!(matches!(
            convert_file(&path, &HtmlOptions::default()),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_to_html_batch_empty() {
        assert!(to_html_batch(&[], &HtmlOptions::default()).is_empty());
    }
}
