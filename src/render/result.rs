//! Rendering result with document properties and statistics.

use crate::model::DocumentProperties;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML
    pub content: String,

    /// Document properties (copied from source document)
    pub properties: DocumentProperties,

    /// Render statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, properties: DocumentProperties, stats: RenderStats) -> Self {
        Self {
            content,
            properties,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of sections rendered
    pub section_count: u32,

    /// Number of elements visited, nested ones included
    pub element_count: u32,

    /// Number of `<p>` paragraphs produced by text, runs, links and list items
    pub paragraph_count: u32,

    /// Number of titles
    pub title_count: u32,

    /// Number of tables with at least one row
    pub table_count: u32,

    /// Images embedded as data URIs
    pub images_embedded: u32,

    /// Images replaced by the placeholder
    pub images_replaced: u32,

    /// Placeholders emitted for unsupported kinds
    pub unsupported_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a rendered section.
    pub(crate) fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Count a visited element.
    pub(crate) fn add_element(&mut self) {
        self.element_count += 1;
    }

    /// Count an emitted paragraph.
    pub(crate) fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Count a heading.
    pub(crate) fn add_title(&mut self) {
        self.title_count += 1;
    }

    /// Count a table with rows.
    pub(crate) fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Count an image embedded as a data URI.
    pub(crate) fn add_embedded_image(&mut self) {
        self.images_embedded += 1;
    }

    /// Count an image replaced by the placeholder.
    pub(crate) fn add_replaced_image(&mut self) {
        self.images_replaced += 1;
    }

    /// Count a placeholder for an unsupported kind.
    pub(crate) fn add_unsupported(&mut self) {
        self.unsupported_count += 1;
    }

    /// Total number of images met, embedded or replaced.
    pub fn image_count(&self) -> u32 {
        self.images_embedded + self.images_replaced
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.section_count += other.section_count;
        self.element_count += other.element_count;
        self.paragraph_count += other.paragraph_count;
        self.title_count += other.title_count;
        self.table_count += other.table_count;
        self.images_embedded += other.images_embedded;
        self.images_replaced += other.images_replaced;
        self.unsupported_count += other.unsupported_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stats_merge() {
        let mut stats1 = RenderStats::new();
        stats1.paragraph_count = 5;
        stats1.table_count = 2;

        let stats2 = RenderStats {
            paragraph_count: 3,
            table_count: 1,
            images_embedded: 4,
            images_replaced: 1,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.paragraph_count, 8);
        assert_eq!(stats1.table_count, 3);
        assert_eq!(stats1.image_count(), 5);
    }

    #[test]
    fn test_counters() {
        let mut stats = RenderStats::new();
        stats.add_section();
        stats.add_element();
        stats.add_element();
        stats.add_embedded_image();
        stats.add_replaced_image();
        stats.add_unsupported();

        assert_eq!(stats.section_count, 1);
        assert_eq!(stats.element_count, 2);
        assert_eq!(stats.image_count(), 2);
        assert_eq!(stats.unsupported_count, 1);
    }

    #[test]
    fn test_render_result_content_len() {
        let result = RenderResult::new(
            "<p>Hello</p>".to_string(),
            DocumentProperties::default(),
            RenderStats::default(),
        );
        assert_eq!(result.content_len(), 12);
    }
}
