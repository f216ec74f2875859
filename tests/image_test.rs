//! Integration tests for image embedding.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use wordhtml::error::Result;
use wordhtml::model::{Bitmap, BitmapFormat, Document, Image, TextRun};
use wordhtml::render::image::encode_bitmap;
use wordhtml::render::{HtmlOptions, HtmlWriter, SystemTempStorage, TempArea, TempStorage};

/// Writes a zip archive holding the given entries.
fn create_archive(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    for (name, data) in entries {
        zip.start_file(*name, zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();
}

fn png_bytes() -> Vec<u8> {
    encode_bitmap(&Bitmap::solid(3, 3, [0, 255, 0, 255], BitmapFormat::Png)).unwrap()
}

fn document_with(images: Vec<Image>) -> Document {
    let mut doc = Document::new();
    let section = doc.add_section();
    for image in images {
        section.add_element(image);
    }
    doc
}

fn render(doc: &Document) -> String {
    HtmlWriter::new(HtmlOptions::default())
        .with_document(doc)
        .render()
        .unwrap()
}

/// Temp storage that records every area it hands out and takes back.
#[derive(Default)]
struct RecordingStorage {
    inner: SystemTempStorage,
    acquired: AtomicUsize,
    released: AtomicUsize,
    paths: Mutex<Vec<PathBuf>>,
}

impl TempStorage for RecordingStorage {
    fn acquire(&self) -> Result<TempArea> {
        let area = self.inner.acquire()?;
        self.acquired.fetch_add(1, Ordering::SeqCst);
        self.paths.lock().unwrap().push(area.path().to_path_buf());
        Ok(area)
    }

    fn release(&self, area: TempArea) -> Result<()> {
        self.released.fetch_add(1, Ordering::SeqCst);
        self.inner.release(area)
    }
}

#[test]
fn test_archive_entry_is_embedded() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("report.docx");
    let png = png_bytes();
    create_archive(&archive, &[("word/media/image1.png", png.as_slice())]);

    let doc = document_with(vec![
        Image::from_archive(&archive, "word/media/image1.png").with_size(30.0, 20.0)
    ]);
    let html = render(&doc);

    assert!(html.contains("<img border=\"0\" style=\"width:30px;height:20px\" src=\"data:image/png;base64,"));
    assert!(!html.contains("&lt;Image&gt;"));
}

#[test]
fn test_archive_locator_form() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("report.docx");
    let png = png_bytes();
    create_archive(&archive, &[("word/media/image1.png", png.as_slice())]);

    let locator = format!("zip://{}#word/media/image1.png", archive.display());
    let html = render(&document_with(vec![Image::from_locator(&locator)]));
    assert!(html.contains("src=\"data:image/png;base64,"));
}

#[test]
fn test_missing_archive_entry_uses_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("report.docx");
    create_archive(&archive, &[("word/document.xml", b"<w:document/>".as_slice())]);

    let doc = document_with(vec![Image::from_archive(&archive, "word/media/missing.png")]);
    let html = render(&doc);

    assert!(html.contains("<p>&lt;Image&gt;</p>"));
    assert!(!html.contains("<img"));
}

#[test]
fn test_corrupt_archive_uses_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("broken.docx");
    fs::write(&archive, b"this is not a zip archive").unwrap();

    let html = render(&document_with(vec![Image::from_archive(&archive, "a.png")]));
    assert!(html.contains("&lt;Image&gt;"));
}

#[test]
fn test_inline_image_in_run() {
    let bitmap = Bitmap::solid(1, 1, [0, 0, 0, 255], BitmapFormat::Gif);
    let mut doc = Document::new();
    doc.add_section()
        .add_element(TextRun::new().with(Image::from_bitmap(bitmap)));
    let html = render(&doc);

    assert!(html.contains("<p><img border=\"0\" src=\"data:image/gif;base64,"));
    assert!(html.contains("\"/></p>\n"));
}

#[test]
fn test_mime_type_from_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.jpg");
    fs::write(&path, b"not really a jpeg").unwrap();

    let html = render(&document_with(vec![Image::from_path(&path)]));
    assert!(html.contains("src=\"data:image/jpeg;base64,"));
}

#[test]
fn test_unknown_mime_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blob.dat");
    fs::write(&path, b"opaque bytes").unwrap();

    let html = render(&document_with(vec![Image::from_path(&path)]));
    assert!(html.contains("src=\"data:application/octet-stream;base64,"));
}

#[test]
fn test_base64_line_chunking() {
    let bitmap = Bitmap::new(
        32,
        32,
        (0..32 * 32 * 4).map(|i| (i * 7 % 251) as u8).collect(),
        BitmapFormat::Bmp,
    );
    let doc = document_with(vec![Image::from_bitmap(bitmap)]);

    let chunked = render(&doc);
    assert!(chunked.contains("\r\n"));

    let single = HtmlWriter::new(HtmlOptions::new().with_base64_line_length(None))
        .with_document(&doc)
        .render()
        .unwrap();
    assert!(!single.contains("\r\n"));
}

#[test]
fn test_temp_area_acquired_once_and_released() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("report.docx");
    let png = png_bytes();
    create_archive(
        &archive,
        &[("word/media/image1.png", png.as_slice()), ("word/media/image2.png", png.as_slice())],
    );

    let doc = document_with(vec![
        Image::from_archive(&archive, "word/media/image1.png"),
        Image::from_archive(&archive, "word/media/image2.png"),
    ]);

    let storage = RecordingStorage::default();
    let html = HtmlWriter::new(HtmlOptions::default())
        .with_document(&doc)
        .with_storage(&storage)
        .render()
        .unwrap();

    assert_eq!(html.matches("<img").count(), 2);
    assert_eq!(storage.acquired.load(Ordering::SeqCst), 1);
    assert_eq!(storage.released.load(Ordering::SeqCst), 1);
    for path in storage.paths.lock().unwrap().iter() {
        assert!(!path.exists());
    }
}

#[test]
fn test_no_temp_area_without_archive_images() {
    let bitmap = Bitmap::solid(2, 2, [1, 2, 3, 255], BitmapFormat::Png);
    let doc = document_with(vec![Image::from_bitmap(bitmap)]);

    let storage = RecordingStorage::default();
    HtmlWriter::new(HtmlOptions::default())
        .with_document(&doc)
        .with_storage(&storage)
        .render()
        .unwrap();

    assert_eq!(storage.acquired.load(Ordering::SeqCst), 0);
    assert_eq!(storage.released.load(Ordering::SeqCst), 0);
}

#[test]
fn test_each_render_gets_its_own_area() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("report.docx");
    let png = png_bytes();
    create_archive(&archive, &[("word/media/image1.png", png.as_slice())]);

    let doc = document_with(vec![Image::from_archive(&archive, "word/media/image1.png")]);
    let storage = RecordingStorage::default();
    let writer = HtmlWriter::new(HtmlOptions::default())
        .with_document(&doc)
        .with_storage(&storage);

    let first = writer.render().unwrap();
    let second = writer.render().unwrap();

    assert_eq!(first, second);
    assert_eq!(storage.acquired.load(Ordering::SeqCst), 2);
    assert_eq!(storage.released.load(Ordering::SeqCst), 2);
}

#[test]
fn test_configured_temp_dir() {
    let base = tempfile::tempdir().unwrap();
    let archive = base.path().join("report.docx");
    let png = png_bytes();
    create_archive(&archive, &[("word/media/image1.png", png.as_slice())]);

    let options = HtmlOptions::new().with_temp_dir(base.path().join("scratch"));
    let doc = document_with(vec![Image::from_archive(&archive, "word/media/image1.png")]);
    let html = wordhtml::render::to_html(&doc, &options).unwrap();

    assert!(html.contains("<img"));
    // the area itself is gone; only the base directory remains
    let leftovers = fs::read_dir(base.path().join("scratch")).unwrap().count();
    assert_eq!(leftovers, 0);
}
