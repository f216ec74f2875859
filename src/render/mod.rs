//! Rendering module for converting documents to HTML.

pub mod css;
mod html;
pub mod image;
mod json;
mod options;
mod result;
pub mod temp;

pub use css::{build_stylesheet, resolve_font, resolve_paragraph, CssDeclarations, FontDefaults};
pub use html::{
    to_html, to_html_batch, to_html_with_stats, HtmlWriter, GENERATOR_COMMENT, UNSUPPORTED_CLASS,
};
pub use image::{ImageMaterializer, MaterializedImage};
pub use json::{from_json, to_json, JsonFormat};
pub use options::{HtmlOptions, BASE64_LINE_LENGTH, DEFAULT_TITLE};
pub use result::{RenderResult, RenderStats};
pub use temp::{SystemTempStorage, TempArea, TempStorage};
