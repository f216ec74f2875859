//! HTML rendering for word-processing documents.
//!
//! [`HtmlWriter`] walks the sections of a bound [`Document`] in order and
//! assembles a standalone page: head with meta tags and the stylesheet, then
//! every element of every section in the body. Images are embedded as data
//! URIs; kinds HTML cannot express become a visible placeholder.

use std::borrow::Cow;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{
    Document, Element, FontStyle, Image, InlineElement, Link, ListItem, ParagraphStyle,
    StyleRef, StyleRegistry, Table, Text, TextRun, Title,
};

use super::css::{
    build_stylesheet, css_identifier, resolve_font, resolve_paragraph, CssDeclarations,
    FontDefaults,
};
use super::image::ImageMaterializer;
use super::temp::{SystemTempStorage, TempStorage};
use super::{HtmlOptions, RenderResult, RenderStats};

/// Comment emitted after the doctype.
pub const GENERATOR_COMMENT: &str = "<!-- Generated by wordhtml -->";

/// Class of the placeholder emitted for unsupported inline elements.
pub const UNSUPPORTED_CLASS: &str = "other-elm";

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &HtmlOptions) -> Result<String> {
    HtmlWriter::new(options.clone()).with_document(doc).render()
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &HtmlOptions) -> Result<RenderResult> {
    HtmlWriter::new(options.clone())
        .with_document(doc)
        .render_with_stats()
}

/// Convert several documents in parallel.
///
/// Each document gets its own writer and temp area; results keep the input
/// order.
pub fn to_html_batch(docs: &[Document], options: &HtmlOptions) -> Vec<Result<String>> {
    docs.par_iter().map(|doc| to_html(doc, options)).collect()
}

/// HTML writer.
///
/// A writer can be reused: rendering never mutates the bound document, so
/// rendering twice yields identical output.
pub struct HtmlWriter<'a> {
    document: Option<&'a Document>,
    options: HtmlOptions,
    storage: Option<&'a dyn TempStorage>,
}

impl<'a> HtmlWriter<'a> {
    /// Create a writer with no document bound.
    pub fn new(options: HtmlOptions) -> Self {
        Self {
            document: None,
            options,
            storage: None,
        }
    }

    /// Bind the document to render.
    pub fn with_document(mut self, doc: &'a Document) -> Self {
        self.document = Some(doc);
        self
    }

    /// Bind or replace the document to render.
    pub fn set_document(&mut self, doc: &'a Document) {
        self.document = Some(doc);
    }

    /// Use a custom provider for archive extraction areas.
    pub fn with_storage(mut self, storage: &'a dyn TempStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Rendering options.
    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    /// Render the bound document.
    ///
    /// Fails with [`Error::NoDocument`] when no document is bound. Every
    /// other problem (missing styles, unreadable images) is recovered
    /// inside the output.
    pub fn render(&self) -> Result<String> {
        let (content, _) = self.render_internal(&self.options)?;
        Ok(content)
    }

    /// Render the bound document and collect statistics.
    pub fn render_with_stats(&self) -> Result<RenderResult> {
        let mut options = self.options.clone();
        options.collect_stats = true;
        let (content, stats) = self.render_internal(&options)?;
        let properties = self
            .document
            .map(|doc| doc.properties.clone())
            .unwrap_or_default();
        Ok(RenderResult::new(content, properties, stats))
    }

    fn render_internal(&self, options: &HtmlOptions) -> Result<(String, RenderStats)> {
        let doc = self.document.ok_or(Error::NoDocument)?;
        log::debug!("Rendering document with {} sections", doc.sections.len());

        let system;
        let storage: &dyn TempStorage = match self.storage {
            Some(storage) => storage,
            None => {
                system = match &options.temp_dir {
                    Some(dir) => SystemTempStorage::in_dir(dir),
                    None => SystemTempStorage::new(),
                };
                &system
            }
        };

        let mut output = String::new();
        write_head(&mut output, doc, options);

        output.push_str("<body>\n");
        let mut renderer = ElementRenderer::new(doc, options, storage);
        for section in &doc.sections {
            renderer.count(RenderStats::add_section);
            for element in &section.elements {
                renderer.render_element(&mut output, element, false);
            }
        }
        let stats = renderer.finish();
        output.push_str("</body>\n</html>\n");

        log::debug!("Rendered {} bytes of HTML", output.len());
        Ok((output, stats))
    }
}

fn write_head(output: &mut String, doc: &Document, options: &HtmlOptions) {
    output.push_str("<!DOCTYPE html>\n");
    if options.generator_comment {
        output.push_str(GENERATOR_COMMENT);
        output.push('\n');
    }
    output.push_str("<html>\n<head>\n");
    output.push_str("<meta charset=\"UTF-8\" />\n");

    let title = doc
        .properties
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(&options.default_title);
    output.push_str(&format!("<title>{}</title>\n", escape(title)));

    for (name, value) in doc.properties.meta_entries() {
        output.push_str(&format!(
            "<meta name=\"{}\" content=\"{}\" />\n",
            name,
            escape(value)
        ));
    }

    output.push_str(&build_stylesheet(
        &doc.styles,
        &doc.default_font_name,
        doc.default_font_size,
    ));
    output.push_str("</head>\n");
}

fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

/// Per-render state: style lookup, image materialization and statistics.
struct ElementRenderer<'r> {
    registry: &'r StyleRegistry,
    defaults: FontDefaults<'r>,
    options: &'r HtmlOptions,
    images: ImageMaterializer<'r>,
    stats: RenderStats,
}

impl<'r> ElementRenderer<'r> {
    fn new(doc: &'r Document, options: &'r HtmlOptions, storage: &'r dyn TempStorage) -> Self {
        Self {
            registry: &doc.styles,
            defaults: FontDefaults::new(&doc.default_font_name, doc.default_font_size),
            options,
            images: ImageMaterializer::new(storage, options.base64_line_length),
            stats: RenderStats::new(),
        }
    }

    fn count(&mut self, update: impl FnOnce(&mut RenderStats)) {
        if self.options.collect_stats {
            update(&mut self.stats);
        }
    }

    fn finish(self) -> RenderStats {
        self.images.finish();
        self.stats
    }

    fn render_element(&mut self, out: &mut String, element: &Element, inline: bool) {
        self.count(RenderStats::add_element);
        match element {
            Element::Text(text) => self.write_text(out, text, inline),
            Element::TextRun(run) => self.write_text_run(out, run, inline),
            Element::Link(link) => self.write_link(out, link, inline),
            Element::Title(title) => self.write_title(out, title),
            Element::TextBreak => self.write_text_break(out, inline),
            Element::ListItem(item) => self.write_list_item(out, item),
            Element::Table(table) => self.write_table(out, table),
            Element::Image(image) => self.write_image(out, image, inline),
            Element::PreserveText(_) | Element::PageBreak | Element::Object(_) => {
                self.write_unsupported(out, element.kind_name(), inline)
            }
            // Notes are references inside the flow of text
            Element::Footnote(_) | Element::Endnote(_) => {
                self.write_unsupported(out, element.kind_name(), true)
            }
        }
    }

    fn render_inline(&mut self, out: &mut String, element: &InlineElement) {
        self.count(RenderStats::add_element);
        match element {
            InlineElement::Text(text) => self.write_text(out, text, true),
            InlineElement::Link(link) => self.write_link(out, link, true),
            InlineElement::TextBreak => self.write_text_break(out, true),
            InlineElement::Image(image) => self.write_image(out, image, true),
            InlineElement::PreserveText(_)
            | InlineElement::Object(_)
            | InlineElement::Footnote(_)
            | InlineElement::Endnote(_) => self.write_unsupported(out, element.kind_name(), true),
        }
    }

    fn render_cell_element(&mut self, out: &mut String, element: &Element) {
        match element {
            Element::Title(_) | Element::Table(_) | Element::PageBreak => {
                self.count(RenderStats::add_element);
                self.write_unsupported(out, element.kind_name(), false);
            }
            _ => self.render_element(out, element, false),
        }
    }

    fn write_text(&mut self, out: &mut String, text: &Text, inline: bool) {
        if !inline {
            self.open_paragraph(out, text.paragraph_style.as_ref());
        }
        self.write_styled(out, &escape(&text.text), text.font_style.as_ref());
        if !inline {
            out.push_str("</p>\n");
        }
    }

    fn write_text_run(&mut self, out: &mut String, run: &TextRun, inline: bool) {
        if run.is_empty() {
            return;
        }
        if !inline {
            self.open_paragraph(out, run.paragraph_style.as_ref());
        }
        for element in &run.elements {
            self.render_inline(out, element);
        }
        if !inline {
            out.push_str("</p>\n");
        }
    }

    fn write_link(&mut self, out: &mut String, link: &Link, inline: bool) {
        if !inline {
            self.open_paragraph(out, None);
        }
        out.push_str(&format!("<a href=\"{}\">", escape(&link.url)));
        self.write_styled(out, &escape(&link.text), link.font_style.as_ref());
        out.push_str("</a>");
        if !inline {
            out.push_str("</p>\n");
        }
    }

    fn write_title(&mut self, out: &mut String, title: &Title) {
        self.count(RenderStats::add_title);
        let level = title.level();
        if level != title.depth {
            log::debug!("Rendering title depth {} as h{}", title.depth, level);
        }
        out.push_str(&format!(
            "<h{}>{}</h{}>\n",
            level,
            escape(&title.text),
            level
        ));
    }

    fn write_text_break(&mut self, out: &mut String, inline: bool) {
        if inline {
            out.push_str("<br/>");
        } else {
            out.push_str("<p>&nbsp;</p>\n");
        }
    }

    fn write_list_item(&mut self, out: &mut String, item: &ListItem) {
        self.count(RenderStats::add_paragraph);
        out.push_str(&format!("<p>{}</p>\n", escape(&item.text.text)));
    }

    fn write_table(&mut self, out: &mut String, table: &Table) {
        if table.rows.is_empty() {
            return;
        }
        self.count(RenderStats::add_table);

        out.push_str("<table>\n");
        for row in &table.rows {
            let tag = if row.header { "th" } else { "td" };
            out.push_str("<tr>\n");
            for cell in &row.cells {
                out.push_str(&format!("<{}>", tag));
                if cell.elements.is_empty() {
                    self.write_text_break(out, false);
                } else {
                    for element in &cell.elements {
                        self.render_cell_element(out, element);
                    }
                }
                out.push_str(&format!("</{}>\n", tag));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</table>\n");
    }

    fn write_image(&mut self, out: &mut String, image: &Image, inline: bool) {
        let materialized = if self.options.pdf_target {
            None
        } else {
            self.images.materialize(image)
        };

        let Some(materialized) = materialized else {
            self.count(RenderStats::add_replaced_image);
            write_placeholder(out, "Image", inline);
            return;
        };
        self.count(RenderStats::add_embedded_image);

        let mut dimensions = Vec::new();
        if let Some(width) = image.width {
            dimensions.push(format!("width:{}px", width));
        }
        if let Some(height) = image.height {
            dimensions.push(format!("height:{}px", height));
        }
        let style = if dimensions.is_empty() {
            String::new()
        } else {
            format!(" style=\"{}\"", dimensions.join(";"))
        };

        let tag = format!(
            "<img border=\"0\"{} src=\"{}\"/>",
            style,
            escape(&materialized.data_uri)
        );
        if inline {
            out.push_str(&tag);
        } else {
            out.push_str(&format!("<p>{}</p>\n", tag));
        }
    }

    fn write_unsupported(&mut self, out: &mut String, kind: &str, inline: bool) {
        self.count(RenderStats::add_unsupported);
        write_placeholder(out, kind, inline);
    }

    fn open_paragraph(&mut self, out: &mut String, style: Option<&StyleRef<ParagraphStyle>>) {
        self.count(RenderStats::add_paragraph);
        out.push_str("<p");
        out.push_str(&self.style_attribute(style, resolve_paragraph));
        out.push('>');
    }

    /// Write already-escaped content, in a span when a font style is set.
    fn write_styled(&self, out: &mut String, content: &str, style: Option<&StyleRef<FontStyle>>) {
        match style {
            Some(style) => {
                let defaults = self.defaults;
                let attribute =
                    self.style_attribute(Some(style), |font| resolve_font(font, &defaults));
                out.push_str(&format!("<span{}>{}</span>", attribute, content));
            }
            None => out.push_str(content),
        }
    }

    /// ` class="…"` for a registered name, ` style="…"` for an inline
    /// style, or nothing.
    fn style_attribute<T>(
        &self,
        style: Option<&StyleRef<T>>,
        resolve: impl Fn(&T) -> CssDeclarations,
    ) -> String {
        match style {
            None => String::new(),
            Some(StyleRef::Named(name)) => {
                if self.registry.contains(name) {
                    format!(" class=\"{}\"", css_identifier(name))
                } else {
                    log::debug!("Style {} is not registered, rendering unstyled", name);
                    String::new()
                }
            }
            Some(StyleRef::Inline(style)) => {
                let css = resolve(style);
                if css.is_empty() {
                    String::new()
                } else {
                    format!(" style=\"{}\"", escape(&css.to_inline()))
                }
            }
        }
    }
}

/// Placeholder for content HTML cannot express.
fn write_placeholder(out: &mut String, kind: &str, inline: bool) {
    let label = html_escape::encode_text(&format!("<{}>", kind)).into_owned();
    if inline {
        out.push_str(&format!(
            "<span class=\"{}\">{}</span>",
            UNSUPPORTED_CLASS, label
        ));
    } else {
        out.push_str(&format!("<p>{}</p>\n", label));
    }
}
