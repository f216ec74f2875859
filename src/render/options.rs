//! Rendering options and configuration.

use std::path::PathBuf;

/// Title used when the document has none.
pub const DEFAULT_TITLE: &str = "untitled";

/// Line length of chunked base64 data in data URIs.
pub const BASE64_LINE_LENGTH: usize = 76;

/// Options for rendering a document to HTML.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Render for a PDF pipeline: images are replaced by placeholders
    pub pdf_target: bool,

    /// Title used when the document title is empty
    pub default_title: String,

    /// Emit a generator comment after the doctype
    pub generator_comment: bool,

    /// Base directory for scoped temp areas (system temp dir if `None`)
    pub temp_dir: Option<PathBuf>,

    /// Line length for chunked base64 image data (`None` = single line)
    pub base64_line_length: Option<usize>,

    /// Collect render statistics
    pub collect_stats: bool,
}

impl HtmlOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render for a PDF pipeline.
    pub fn for_pdf(mut self) -> Self {
        self.pdf_target = true;
        self
    }

    /// Enable or disable the PDF target mode.
    pub fn with_pdf_target(mut self, pdf: bool) -> Self {
        self.pdf_target = pdf;
        self
    }

    /// Set the fallback title.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Enable or disable the generator comment.
    pub fn with_generator_comment(mut self, emit: bool) -> Self {
        self.generator_comment = emit;
        self
    }

    /// Set the base directory for temp areas.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Set the base64 line length; `None` disables chunking.
    pub fn with_base64_line_length(mut self, length: Option<usize>) -> Self {
        self.base64_line_length = length.filter(|&n| n > 0);
        self
    }
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pdf_target: false,
            default_title: DEFAULT_TITLE.to_string(),
            generator_comment: true,
            temp_dir: None,
            base64_line_length: Some(BASE64_LINE_LENGTH),
            collect_stats: false,
        }
    }
}
