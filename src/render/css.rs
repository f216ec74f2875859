//! CSS generation from font and paragraph styles.
//!
//! Inline styles become `style="…"` attribute values; named styles become a
//! rule in the document stylesheet and are referenced with `class="…"`.

use crate::model::{
    FontStyle, ParagraphStyle, Style, StyleRegistry, Underline, DEFAULT_FONT_COLOR,
    HEADING_PREFIX,
};

/// Characters never allowed in a declaration value.
const UNSAFE_VALUE_CHARS: [char; 5] = ['<', '>', '{', '}', ';'];

/// Map a style name to a valid CSS class identifier.
///
/// Characters outside `[A-Za-z0-9_-]` become `_`, and a leading digit gets
/// a `_` prefix. The same identifier is used for the stylesheet selector and
/// the element's `class` attribute.
pub fn css_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Quote a font family name for a `font-family` value.
pub fn quote_family(name: &str) -> String {
    format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Document defaults a font style is compared against.
#[derive(Debug, Clone, Copy)]
pub struct FontDefaults<'a> {
    /// Default font family
    pub name: &'a str,
    /// Default font size in points
    pub size: f32,
}

impl<'a> FontDefaults<'a> {
    /// Create font defaults.
    pub fn new(name: &'a str, size: f32) -> Self {
        Self { name, size }
    }
}

/// An ordered list of CSS declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssDeclarations {
    entries: Vec<(&'static str, String)>,
}

impl CssDeclarations {
    /// Create an empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration.
    ///
    /// Empty values are dropped, and so are values holding characters that
    /// would end the declaration, the rule or the `<style>` element.
    pub fn push(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        if value.contains(UNSAFE_VALUE_CHARS) {
            log::debug!("Dropping unsafe value for {}: {:?}", property, value);
            return;
        }
        self.entries.push((property, value));
    }

    /// Get the value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Check if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Attribute form: `prop: value; prop: value`.
    pub fn to_inline(&self) -> String {
        self.entries
            .iter()
            .map(|(p, v)| format!("{}: {}", p, v))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Rule-block form: `{ prop: value; prop: value }`.
    pub fn to_block(&self) -> String {
        format!("{{ {} }}", self.to_inline())
    }
}

/// Resolve a font style into CSS declarations.
///
/// Family, size and color are only emitted when they differ from the
/// document defaults.
pub fn resolve_font(style: &FontStyle, defaults: &FontDefaults<'_>) -> CssDeclarations {
    let mut css = CssDeclarations::new();

    if let Some(name) = style.name.as_deref() {
        if !name.is_empty() && name != defaults.name {
            css.push("font-family", quote_family(name));
        }
    }
    if let Some(size) = style.size {
        if size != defaults.size {
            css.push("font-size", format!("{}pt", size));
        }
    }
    if let Some(color) = style.color.as_deref() {
        let color = color.trim_start_matches('#');
        if !color.is_empty() && !color.eq_ignore_ascii_case(DEFAULT_FONT_COLOR) {
            css.push("color", format!("#{}", color));
        }
    }
    css.push("background", style.fg_color.clone().unwrap_or_default());
    if style.bold {
        css.push("font-weight", "bold");
    }
    if style.italic {
        css.push("font-style", "italic");
    }
    if style.superscript {
        css.push("vertical-align", "super");
    } else if style.subscript {
        css.push("vertical-align", "sub");
    }

    let mut decoration = Vec::new();
    if style.underline != Underline::None {
        decoration.push("underline");
    }
    if style.strikethrough {
        decoration.push("line-through");
    }
    css.push("text-decoration", decoration.join(" "));

    css
}

/// Resolve a paragraph style into CSS declarations.
pub fn resolve_paragraph(style: &ParagraphStyle) -> CssDeclarations {
    let mut css = CssDeclarations::new();
    if let Some(alignment) = style.alignment {
        css.push("text-align", alignment.as_css());
    }
    css
}

/// CSS selector for a registered style.
pub fn selector_for(name: &str, style: &Style) -> String {
    match style {
        Style::Font(font) if font.is_title() => {
            css_identifier(&name.replace(HEADING_PREFIX, "h"))
        }
        Style::Font(_) | Style::Paragraph(_) => format!(".{}", css_identifier(name)),
    }
}

/// Build the document stylesheet, including the `<style>` tags.
///
/// The first rule applies the document defaults to every element; one rule
/// per registered style follows, in registration order.
pub fn build_stylesheet(
    registry: &StyleRegistry,
    default_font_name: &str,
    default_font_size: f32,
) -> String {
    let defaults = FontDefaults::new(default_font_name, default_font_size);
    let mut css = String::from("<style>\n");

    let mut body = CssDeclarations::new();
    body.push("font-family", quote_family(default_font_name));
    body.push("font-size", format!("{}pt", default_font_size));
    css.push_str(&format!("* {}\n", body.to_block()));

    for (name, style) in registry.iter() {
        let declarations = match style {
            Style::Font(font) => resolve_font(font, &defaults),
            Style::Paragraph(paragraph) => resolve_paragraph(paragraph),
        };
        css.push_str(&format!(
            "{} {}\n",
            selector_for(name, style),
            declarations.to_block()
        ));
    }

    css.push_str("</style>\n");
    log::debug!("Built stylesheet with {} named styles", registry.len());
    css
}
