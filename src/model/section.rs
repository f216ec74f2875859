//! Section-level types.

use super::{Image, Link, ListItem, Note, Object, PreserveText, Table, Text, TextRun, Title};
use serde::{Deserialize, Serialize};

/// A document section: an ordered sequence of elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Content elements in the section
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Section {
    /// Create a new empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the section.
    pub fn add_element(&mut self, element: impl Into<Element>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    /// Add unstyled text.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_element(Text::new(text))
    }

    /// Add a heading.
    pub fn add_title(&mut self, text: impl Into<String>, depth: u8) -> &mut Self {
        self.add_element(Title::new(text, depth))
    }

    /// Add an empty paragraph.
    pub fn add_text_break(&mut self) -> &mut Self {
        self.add_element(Element::TextBreak)
    }

    /// Add a page break.
    pub fn add_page_break(&mut self) -> &mut Self {
        self.add_element(Element::PageBreak)
    }

    /// Check if the section has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements in the section.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Get plain text content of the section.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .map(|e| e.plain_text())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A content element in a section or table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// A paragraph of styled text
    Text(Text),

    /// A paragraph made of inline elements
    TextRun(TextRun),

    /// A hyperlink paragraph
    Link(Link),

    /// A heading
    Title(Title),

    /// Text with field codes
    PreserveText(PreserveText),

    /// An empty paragraph
    TextBreak,

    /// A page break
    PageBreak,

    /// A table
    Table(Table),

    /// A list item
    ListItem(ListItem),

    /// An image
    Image(Image),

    /// An embedded object
    Object(Object),

    /// A footnote
    Footnote(Note),

    /// An endnote
    Endnote(Note),
}

impl Element {
    /// Name of the element kind, as shown by the unsupported-element
    /// placeholder.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Text(_) => "Text",
            Element::TextRun(_) => "TextRun",
            Element::Link(_) => "Link",
            Element::Title(_) => "Title",
            Element::PreserveText(_) => "PreserveText",
            Element::TextBreak => "TextBreak",
            Element::PageBreak => "PageBreak",
            Element::Table(_) => "Table",
            Element::ListItem(_) => "ListItem",
            Element::Image(_) => "Image",
            Element::Object(_) => "Object",
            Element::Footnote(_) => "Footnote",
            Element::Endnote(_) => "Endnote",
        }
    }

    /// Check if this element is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Element::Table(_))
    }

    /// Check if this element is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, Element::Image(_))
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        match self {
            Element::Text(t) => t.text.clone(),
            Element::TextRun(r) => r.plain_text(),
            Element::Link(l) => l.text.clone(),
            Element::Title(t) => t.text.clone(),
            Element::PreserveText(p) => p.text.clone(),
            Element::ListItem(i) => i.text.text.clone(),
            Element::Table(t) => t.plain_text(),
            Element::TextBreak
            | Element::PageBreak
            | Element::Image(_)
            | Element::Object(_)
            | Element::Footnote(_)
            | Element::Endnote(_) => String::new(),
        }
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Element::Text(text)
    }
}

impl From<TextRun> for Element {
    fn from(run: TextRun) -> Self {
        Element::TextRun(run)
    }
}

impl From<Link> for Element {
    fn from(link: Link) -> Self {
        Element::Link(link)
    }
}

impl From<Title> for Element {
    fn from(title: Title) -> Self {
        Element::Title(title)
    }
}

impl From<Table> for Element {
    fn from(table: Table) -> Self {
        Element::Table(table)
    }
}

impl From<ListItem> for Element {
    fn from(item: ListItem) -> Self {
        Element::ListItem(item)
    }
}

impl From<Image> for Element {
    fn from(image: Image) -> Self {
        Element::Image(image)
    }
}
