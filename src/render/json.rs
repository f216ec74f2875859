//! JSON serialization of the document model.

use crate::error::Result;
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc)?,
        JsonFormat::Compact => serde_json::to_string(doc)?,
    };
    Ok(json)
}

/// Build a document from JSON.
pub fn from_json(json: &str) -> Result<Document> {
    let doc: Document = serde_json::from_str(json)?;
    log::debug!(
        "Loaded document with {} sections and {} named styles",
        doc.section_count(),
        doc.styles.len()
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{
        Alignment, DocumentProperties, Element, ParagraphStyle, StyleRef, Table, Row, Text,
    };

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.properties = DocumentProperties::with_title("Test");
        doc.styles
            .add_paragraph_style("Normal", ParagraphStyle::aligned(Alignment::Center));
        doc.add_section()
            .add_element(Text::new("Hello").with_paragraph_name("Normal"))
            .add_element(Table::new().with_row(Row::from_strings(["a", "b"])));
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("Test"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_from_json_preserves_structure() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        let doc = from_json(&json).unwrap();

        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].elements.len(), 2);
        assert!(doc.sections[0].elements[1].is_table());
        assert!(doc.styles.contains("Normal"));
    }

    #[test]
    fn test_from_json_named_and_inline_styles() {
        let json = r#"{
            "sections": [{
                "elements": [
                    {"type": "text", "text": "a", "paragraph_style": "Normal"},
                    {"type": "text", "text": "b", "paragraph_style": {"alignment": "both"}}
                ]
            }]
        }"#;
        let doc = from_json(json).unwrap();

        let Element::Text(named) = &doc.sections[0].elements[0] else {
            panic!("expected text");
        };
        assert_eq!(
            named.paragraph_style.as_ref().and_then(|s| s.name()),
            Some("Normal")
        );

        let Element::Text(inline) = &doc.sections[0].elements[1] else {
            panic!("expected text");
        };
        match &inline.paragraph_style {
            Some(StyleRef::Inline(style)) => assert_eq!(style.alignment, Some(Alignment::Justify)),
            other => panic!("unexpected style {:?}", other),
        }
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(from_json("{not json"), Err(Error::Json(_))));
    }
}
