//! Document model types for HTML export.
//!
//! This module defines the word-processing document tree the HTML writer
//! reads: sections of elements, tables, images and the named-style
//! registry. The model is built completely before rendering and is never
//! mutated by it.

mod document;
mod image;
mod paragraph;
mod section;
mod style;
mod table;

pub use document::{
    Document, DocumentProperties, DEFAULT_FONT_COLOR, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE,
};
pub use image::{
    detect_mime_type, mime_type_from_extension, Bitmap, BitmapFormat, Image, ImageSource,
    ARCHIVE_SCHEME,
};
pub use paragraph::{
    InlineElement, Link, ListItem, Note, Object, PreserveText, Text, TextRun, Title,
};
pub use section::{Element, Section};
pub use style::{
    Alignment, FontStyle, FontStyleType, ParagraphStyle, Style, StyleRef, StyleRegistry,
    Underline, HEADING_PREFIX,
};
pub use table::{Cell, Row, Table};
