//! Font and paragraph styles, and the named-style registry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix of the registry names given to heading styles.
pub const HEADING_PREFIX: &str = "Heading_";

/// A style attached to an element: either a reference to a registered
/// style or a style object carried inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleRef<T> {
    /// Name of a style in the [`StyleRegistry`]
    Named(String),
    /// Inline style object
    Inline(T),
}

impl<T> StyleRef<T> {
    /// Get the referenced name, if this is a named reference.
    pub fn name(&self) -> Option<&str> {
        match self {
            StyleRef::Named(name) => Some(name),
            StyleRef::Inline(_) => None,
        }
    }
}

impl<T> From<T> for StyleRef<T> {
    fn from(style: T) -> Self {
        StyleRef::Inline(style)
    }
}

/// Underline mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Underline {
    /// No underline (default)
    #[default]
    None,
    /// Single line
    Single,
    /// Double line
    Double,
    /// Dotted line
    Dotted,
    /// Dashed line
    Dash,
    /// Wavy line
    Wave,
    /// Underline words only
    Words,
}

/// Whether a font style is an ordinary character style or a heading style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyleType {
    /// Character style
    #[default]
    Font,
    /// Heading (title) style
    Title,
}

/// Character styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontStyle {
    /// Font family; `None` means the document default
    pub name: Option<String>,

    /// Font size in points; `None` means the document default
    pub size: Option<f32>,

    /// Text color in hex without `#` (e.g., "FF0000")
    pub color: Option<String>,

    /// Foreground highlight color, emitted as CSS background
    pub fg_color: Option<String>,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Superscript
    pub superscript: bool,

    /// Subscript
    pub subscript: bool,

    /// Underline mode
    pub underline: Underline,

    /// Strikethrough text
    pub strikethrough: bool,

    /// Character or heading style
    pub style_type: FontStyleType,
}

impl FontStyle {
    /// Create an empty font style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the font size in points.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the text color (hex without `#`).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the highlight color.
    pub fn with_fg_color(mut self, color: impl Into<String>) -> Self {
        self.fg_color = Some(color.into());
        self
    }

    /// Make the text bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Make the text italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Raise the text to superscript.
    pub fn superscript(mut self) -> Self {
        self.superscript = true;
        self
    }

    /// Lower the text to subscript.
    pub fn subscript(mut self) -> Self {
        self.subscript = true;
        self
    }

    /// Set the underline mode.
    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.underline = underline;
        self
    }

    /// Strike the text through.
    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// Check if this is a heading style.
    pub fn is_title(&self) -> bool {
        self.style_type == FontStyleType::Title
    }
}

/// Text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    #[serde(alias = "both")]
    Justify,
}

impl Alignment {
    /// CSS `text-align` value.
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    /// Text alignment; `None` leaves alignment to the cascade
    pub alignment: Option<Alignment>,
}

impl ParagraphStyle {
    /// Create a paragraph style with the given alignment.
    pub fn aligned(alignment: Alignment) -> Self {
        Self {
            alignment: Some(alignment),
        }
    }
}

/// A registered style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "style", rename_all = "lowercase")]
pub enum Style {
    /// Character style
    Font(FontStyle),
    /// Paragraph style
    Paragraph(ParagraphStyle),
}

/// Named styles, kept in registration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRegistry {
    styles: IndexMap<String, Style>,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style, replacing any previous style of the same name
    /// while keeping its original position.
    pub fn add(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    /// Register a character style.
    pub fn add_font_style(&mut self, name: impl Into<String>, style: FontStyle) {
        self.add(name, Style::Font(style));
    }

    /// Register a paragraph style.
    pub fn add_paragraph_style(&mut self, name: impl Into<String>, style: ParagraphStyle) {
        self.add(name, Style::Paragraph(style));
    }

    /// Register a heading style for the given depth as `Heading_{depth}`.
    pub fn add_title_style(&mut self, depth: u8, mut style: FontStyle) {
        style.style_type = FontStyleType::Title;
        self.add(format!("{}{}", HEADING_PREFIX, depth), Style::Font(style));
    }

    /// Look up a style by name.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Check if a style is registered under the name.
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Iterate over styles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.styles.iter().map(|(name, style)| (name.as_str(), style))
    }

    /// Number of registered styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
