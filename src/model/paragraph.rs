//! Paragraph and text-level types.

use super::{FontStyle, Image, ParagraphStyle, StyleRef};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A run of text with optional paragraph and font styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// The text content
    pub text: String,

    /// Character style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<StyleRef<FontStyle>>,

    /// Paragraph style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_style: Option<StyleRef<ParagraphStyle>>,
}

impl Text {
    /// Create unstyled text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the font style (named or inline).
    pub fn with_font(mut self, style: impl Into<StyleRef<FontStyle>>) -> Self {
        self.font_style = Some(style.into());
        self
    }

    /// Set the paragraph style (named or inline).
    pub fn with_paragraph(mut self, style: impl Into<StyleRef<ParagraphStyle>>) -> Self {
        self.paragraph_style = Some(style.into());
        self
    }

    /// Reference a registered font style.
    pub fn with_font_name(self, name: impl Into<String>) -> Self {
        self.with_font(StyleRef::Named(name.into()))
    }

    /// Reference a registered paragraph style.
    pub fn with_paragraph_name(self, name: impl Into<String>) -> Self {
        self.with_paragraph(StyleRef::Named(name.into()))
    }
}

/// A paragraph made of several inline elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Inline children, in order
    #[serde(default)]
    pub elements: Vec<InlineElement>,

    /// Paragraph style of the wrapping paragraph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_style: Option<StyleRef<ParagraphStyle>>,
}

impl TextRun {
    /// Create an empty run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paragraph style (named or inline).
    pub fn with_paragraph(mut self, style: impl Into<StyleRef<ParagraphStyle>>) -> Self {
        self.paragraph_style = Some(style.into());
        self
    }

    /// Add an inline element.
    pub fn add(&mut self, element: impl Into<InlineElement>) {
        self.elements.push(element.into());
    }

    /// Add an inline element and return self.
    pub fn with(mut self, element: impl Into<InlineElement>) -> Self {
        self.add(element);
        self
    }

    /// Add plain text.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.add(Text::new(text));
    }

    /// Add a line break.
    pub fn add_break(&mut self) {
        self.add(InlineElement::TextBreak);
    }

    /// Check if the run has no children.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get plain text content of the run.
    pub fn plain_text(&self) -> String {
        self.elements.iter().map(|e| e.plain_text()).collect()
    }
}

/// A hyperlink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Link target
    pub url: String,

    /// Link text
    pub text: String,

    /// Character style of the link text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<StyleRef<FontStyle>>,
}

impl Link {
    /// Create a link.
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
            font_style: None,
        }
    }

    /// Set the font style (named or inline).
    pub fn with_font(mut self, style: impl Into<StyleRef<FontStyle>>) -> Self {
        self.font_style = Some(style.into());
        self
    }
}

/// A heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Heading text
    pub text: String,

    /// Heading level (1-6)
    pub depth: u8,
}

impl Title {
    /// Create a heading; depth is clamped to 1-6.
    pub fn new(text: impl Into<String>, depth: u8) -> Self {
        let clamped = depth.clamp(1, 6);
        if clamped != depth {
            log::debug!("Title depth {} clamped to {}", depth, clamped);
        }
        Self {
            text: text.into(),
            depth: clamped,
        }
    }

    /// Heading level clamped to the range HTML supports.
    pub fn level(&self) -> u8 {
        self.depth.clamp(1, 6)
    }
}

/// Text containing field codes (e.g., `{PAGE}`) that only a layout
/// engine can resolve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreserveText {
    /// Raw text with field codes
    pub text: String,
}

impl PreserveText {
    /// Create preserved text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A list item. Items render as flat paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Item text
    pub text: Text,

    /// Nesting depth (0 = top level)
    #[serde(default)]
    pub depth: u8,
}

impl ListItem {
    /// Create a top-level list item.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Text::new(text),
            depth: 0,
        }
    }

    /// Set the nesting depth.
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }
}

/// An embedded OLE object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Object {
    /// Path of the embedded object file
    pub source: PathBuf,
}

impl Object {
    /// Create an object reference.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Body of a footnote or endnote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Note content
    #[serde(default)]
    pub elements: Vec<InlineElement>,
}

impl Note {
    /// Create a note holding plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            elements: vec![InlineElement::Text(Text::new(text))],
        }
    }

    /// Get plain text content of the note.
    pub fn plain_text(&self) -> String {
        self.elements.iter().map(|e| e.plain_text()).collect()
    }
}

/// Element allowed inside a text run or note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineElement {
    /// Styled text
    Text(Text),
    /// Hyperlink
    Link(Link),
    /// Line break
    TextBreak,
    /// Inline image
    Image(Image),
    /// Text with field codes
    PreserveText(PreserveText),
    /// Embedded object
    Object(Object),
    /// Footnote reference
    Footnote(Note),
    /// Endnote reference
    Endnote(Note),
}

impl InlineElement {
    /// Name of the element kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            InlineElement::Text(_) => "Text",
            InlineElement::Link(_) => "Link",
            InlineElement::TextBreak => "TextBreak",
            InlineElement::Image(_) => "Image",
            InlineElement::PreserveText(_) => "PreserveText",
            InlineElement::Object(_) => "Object",
            InlineElement::Footnote(_) => "Footnote",
            InlineElement::Endnote(_) => "Endnote",
        }
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        match self {
            InlineElement::Text(t) => t.text.clone(),
            InlineElement::Link(l) => l.text.clone(),
            InlineElement::TextBreak => "\n".to_string(),
            InlineElement::PreserveText(p) => p.text.clone(),
            InlineElement::Image(_)
            | InlineElement::Object(_)
            | InlineElement::Footnote(_)
            | InlineElement::Endnote(_) => String::new(),
        }
    }
}

impl From<Text> for InlineElement {
    fn from(text: Text) -> Self {
        InlineElement::Text(text)
    }
}

impl From<Link> for InlineElement {
    fn from(link: Link) -> Self {
        InlineElement::Link(link)
    }
}

impl From<Image> for InlineElement {
    fn from(image: Image) -> Self {
        InlineElement::Image(image)
    }
}
