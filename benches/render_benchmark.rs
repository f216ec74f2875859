//! Benchmarks for wordhtml rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic documents built in memory.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wordhtml::model::{
    Alignment, Bitmap, BitmapFormat, Cell, Document, FontStyle, Image, ParagraphStyle, Row,
    Table, Text, TextRun,
};
use wordhtml::render::{self, build_stylesheet, HtmlOptions};

/// Creates a document with the given number of sections of mixed content.
fn create_test_document(section_count: usize) -> Document {
    let mut doc = Document::new();
    doc.styles
        .add_paragraph_style("Normal", ParagraphStyle::aligned(Alignment::Justify));
    doc.styles.add_font_style("Strong", FontStyle::new().bold());
    doc.styles
        .add_title_style(1, FontStyle::new().with_size(16.0).bold());

    for i in 0..section_count {
        let section = doc.add_section();
        section.add_title(format!("Section {}", i + 1), 1);
        for j in 0..10 {
            section.add_element(
                Text::new(format!(
                    "Paragraph {} of section {} with <markup> & \"quotes\" to escape.",
                    j,
                    i + 1
                ))
                .with_paragraph_name("Normal"),
            );
        }
        section.add_element(
            TextRun::new()
                .with(Text::new("Bold").with_font_name("Strong"))
                .with(Text::new(" and inline").with_font(FontStyle::new().italic())),
        );

        let mut table = Table::new().with_row(Row::header(vec![
            Cell::text("Name"),
            Cell::text("Value"),
        ]));
        for k in 0..5 {
            table.add_row(Row::from_strings([format!("key {}", k), format!("{}", k * 10)]));
        }
        section.add_element(table);
    }

    doc
}

/// Benchmark whole-document rendering.
fn bench_render(c: &mut Criterion) {
    let options = HtmlOptions::default();
    let mut group = c.benchmark_group("render");

    for sections in [1, 10, 50] {
        let doc = create_test_document(sections);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &doc, |b, doc| {
            b.iter(|| render::to_html(black_box(doc), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark stylesheet generation.
fn bench_stylesheet(c: &mut Criterion) {
    let mut doc = Document::new();
    for i in 0..100 {
        doc.styles
            .add_font_style(format!("Style{}", i), FontStyle::new().with_size(8.0 + i as f32));
    }

    c.bench_function("build_stylesheet_100", |b| {
        b.iter(|| build_stylesheet(black_box(&doc.styles), "Arial", 10.0));
    });
}

/// Benchmark image embedding from a generated bitmap.
fn bench_image_embedding(c: &mut Criterion) {
    let mut doc = Document::new();
    doc.add_section().add_element(Image::from_bitmap(Bitmap::solid(
        64,
        64,
        [200, 100, 50, 255],
        BitmapFormat::Png,
    )));
    let options = HtmlOptions::default();

    c.bench_function("embed_bitmap_64", |b| {
        b.iter(|| render::to_html(black_box(&doc), &options).unwrap());
    });
}

/// Benchmark parallel batch rendering.
fn bench_batch(c: &mut Criterion) {
    let docs: Vec<Document> = (0..16).map(|_| create_test_document(5)).collect();
    let options = HtmlOptions::default();

    c.bench_function("batch_16", |b| {
        b.iter(|| render::to_html_batch(black_box(&docs), &options));
    });
}

criterion_group!(
    benches,
    bench_render,
    bench_stylesheet,
    bench_image_embedding,
    bench_batch
);
criterion_main!(benches);
