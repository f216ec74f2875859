//! Document-level types.

use super::{Section, StyleRegistry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default font family applied to the whole document.
pub const DEFAULT_FONT_NAME: &str = "Arial";

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

/// Default text color (hex, without `#`).
pub const DEFAULT_FONT_COLOR: &str = "000000";

/// A word-processing document ready for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document properties (title, creator, etc.)
    #[serde(default)]
    pub properties: DocumentProperties,

    /// Sections in the document
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Named styles referenced by elements
    #[serde(default)]
    pub styles: StyleRegistry,

    /// Default font family
    #[serde(default = "default_font_name")]
    pub default_font_name: String,

    /// Default font size in points
    #[serde(default = "default_font_size")]
    pub default_font_size: f32,
}

fn default_font_name() -> String {
    DEFAULT_FONT_NAME.to_string()
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            properties: DocumentProperties::default(),
            sections: Vec::new(),
            styles: StyleRegistry::new(),
            default_font_name: default_font_name(),
            default_font_size: default_font_size(),
        }
    }

    /// Add a section and return a mutable reference to it.
    pub fn add_section(&mut self) -> &mut Section {
        self.sections.push(Section::new());
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    /// Set the default font.
    pub fn with_default_font(mut self, name: impl Into<String>, size: f32) -> Self {
        self.default_font_name = name.into();
        self.default_font_size = size;
        self
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get the total number of top-level elements across all sections.
    pub fn element_count(&self) -> usize {
        self.sections.iter().map(|s| s.elements.len()).sum()
    }

    /// Check if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.is_empty())
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(|section| section.plain_text())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentProperties {
    /// Document author
    pub creator: Option<String>,

    /// Document title
    pub title: Option<String>,

    /// Description
    pub description: Option<String>,

    /// Subject
    pub subject: Option<String>,

    /// Keywords
    pub keywords: Option<String>,

    /// Category
    pub category: Option<String>,

    /// Company
    pub company: Option<String>,

    /// Manager
    pub manager: Option<String>,

    /// Last editor
    pub last_modified_by: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,

    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    /// Create properties with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Properties exported as HTML meta tags, paired with their meta name.
    ///
    /// Empty values are skipped and `creator` is published as `author`.
    pub fn meta_entries(&self) -> Vec<(&'static str, &str)> {
        let fields: [(&'static str, &Option<String>); 8] = [
            ("author", &self.creator),
            ("title", &self.title),
            ("description", &self.description),
            ("subject", &self.subject),
            ("keywords", &self.keywords),
            ("category", &self.category),
            ("company", &self.company),
            ("manager", &self.manager),
        ];

        fields
            .into_iter()
            .filter_map(|(name, value)| match value.as_deref() {
                Some(v) if !v.is_empty() => Some((name, v)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.section_count(), 0);
        assert_eq!(doc.default_font_name, "Arial");
        assert_eq!(doc.default_font_size, 10.0);
    }

    #[test]
    fn test_add_section() {
        let mut doc = Document::new();
        doc.add_section().add_text("Hello");
        doc.add_section().add_element(Element::PageBreak);

        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.element_count(), 2);
        assert_eq!(doc.plain_text(), "Hello");
    }

    #[test]
    fn test_meta_entries() {
        let mut props = DocumentProperties::with_title("Report");
        props.creator = Some("Jane".to_string());
        props.subject = Some(String::new());

        let entries = props.meta_entries();
        assert_eq!(entries, vec![("author", "Jane"), ("title", "Report")]);
    }
}
