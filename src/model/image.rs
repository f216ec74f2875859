//! Image elements and their sources.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Scheme prefix of archive-entry locators (`zip://{archive}#{entry}`).
pub const ARCHIVE_SCHEME: &str = "zip://";

/// An image element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Where the image bytes come from
    pub source: ImageSource,

    /// Display width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Display height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    /// MIME type (e.g., "image/png"); detected from the bytes when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl Image {
    /// Create an image from a source.
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            width: None,
            height: None,
            mime_type: None,
        }
    }

    /// Create an image from a file path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(ImageSource::Path(path.into()))
    }

    /// Create an image from an entry inside a zip container.
    pub fn from_archive(archive: impl Into<PathBuf>, entry: impl Into<String>) -> Self {
        Self::new(ImageSource::Archive {
            archive: archive.into(),
            entry: entry.into(),
        })
    }

    /// Create an image from an in-memory bitmap.
    pub fn from_bitmap(bitmap: Bitmap) -> Self {
        Self::new(ImageSource::Generated(bitmap))
    }

    /// Create an image from a locator string (see [`ImageSource::parse`]).
    pub fn from_locator(locator: &str) -> Self {
        Self::new(ImageSource::parse(locator))
    }

    /// Set display dimensions.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Location of image bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// File on disk
    Path(PathBuf),

    /// Bitmap generated in memory
    Generated(Bitmap),

    /// Entry inside a zip container (e.g., a `.docx` package)
    Archive {
        /// Path of the container
        archive: PathBuf,
        /// Entry name inside the container
        entry: String,
    },
}

impl ImageSource {
    /// Parse a locator string.
    ///
    /// `zip://{archive}#{entry}` denotes an archive entry; anything else is
    /// a filesystem path.
    pub fn parse(locator: &str) -> Self {
        if let Some(rest) = locator.strip_prefix(ARCHIVE_SCHEME) {
            if let Some((archive, entry)) = rest.split_once('#') {
                return ImageSource::Archive {
                    archive: PathBuf::from(archive),
                    entry: entry.to_string(),
                };
            }
        }
        ImageSource::Path(PathBuf::from(locator))
    }

    /// File extension hinted by the source, lowercased.
    pub fn extension(&self) -> Option<String> {
        let ext = match self {
            ImageSource::Path(path) => path.extension()?.to_str()?.to_string(),
            ImageSource::Archive { entry, .. } => {
                Path::new(entry).extension()?.to_str()?.to_string()
            }
            ImageSource::Generated(bitmap) => bitmap.format.extension().to_string(),
        };
        Some(ext.to_lowercase())
    }
}

/// Output format of a generated bitmap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitmapFormat {
    /// PNG (default)
    #[default]
    Png,
    /// JPEG
    Jpeg,
    /// GIF
    Gif,
    /// Windows bitmap
    Bmp,
}

impl BitmapFormat {
    /// MIME type of the encoded output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            BitmapFormat::Png => "image/png",
            BitmapFormat::Jpeg => "image/jpeg",
            BitmapFormat::Gif => "image/gif",
            BitmapFormat::Bmp => "image/bmp",
        }
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            BitmapFormat::Png => "png",
            BitmapFormat::Jpeg => "jpg",
            BitmapFormat::Gif => "gif",
            BitmapFormat::Bmp => "bmp",
        }
    }
}

/// A raw RGBA8 pixel buffer, encoded on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bitmap {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Pixel data, 4 bytes per pixel, row-major
    pub pixels: Vec<u8>,

    /// Encoding used when the bitmap is materialized
    #[serde(default)]
    pub format: BitmapFormat,
}

impl Bitmap {
    /// Create a bitmap from RGBA8 pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>, format: BitmapFormat) -> Self {
        Self {
            width,
            height,
            pixels,
            format,
        }
    }

    /// Create a bitmap filled with one RGBA color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4], format: BitmapFormat) -> Self {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self::new(width, height, pixels, format)
    }

    /// Check that the pixel buffer matches the dimensions.
    pub fn is_consistent(&self) -> bool {
        self.pixels.len() == self.width as usize * self.height as usize * 4
    }
}

/// Detect MIME type from data magic bytes.
pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
    if data.len() < 8 {
        return None;
    }

    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }

    // GIF: GIF87a or GIF89a
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some("image/gif");
    }

    // TIFF: little-endian or big-endian
    if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
    {
        return Some("image/tiff");
    }

    // BMP: BM
    if data.starts_with(b"BM") {
        return Some("image/bmp");
    }

    // WEBP: RIFF....WEBP
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    // EMF: record type 1, " EMF" signature at offset 40
    if data.len() >= 44 && data.starts_with(&[0x01, 0x00, 0x00, 0x00]) && &data[40..44] == b" EMF"
    {
        return Some("image/emf");
    }

    None
}

/// Guess MIME type from a file extension.
pub fn mime_type_from_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" | "jpe" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "emf" => Some("image/emf"),
        "wmf" => Some("image/wmf"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_archive_locator() {
        let source = ImageSource::parse("zip://report.docx#word/media/image1.png");
        assert_eq!(
            source,
            ImageSource::Archive {
                archive: PathBuf::from("report.docx"),
                entry: "word/media/image1.png".to_string(),
            }
        );
        assert_eq!(source.extension().as_deref(), Some("png"));
    }

    #[test]
    fn test_parse_path_locator() {
        assert_eq!(
            ImageSource::parse("images/logo.JPG"),
            ImageSource::Path(PathBuf::from("images/logo.JPG"))
        );
        // Without an entry separator the locator is treated as a path.
        assert!(matches!(
            ImageSource::parse("zip://broken.docx"),
            ImageSource::Path(_)
        ));
    }

    #[test]
    fn test_detect_mime_type() {
        let jpeg_data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert_eq!(detect_mime_type(&jpeg_data), Some("image/jpeg"));

        let png_data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(detect_mime_type(&png_data), Some("image/png"));

        assert_eq!(detect_mime_type(&[0x00; 4]), None);
    }

    #[test]
    fn test_mime_type_from_extension() {
        assert_eq!(mime_type_from_extension("JPEG"), Some("image/jpeg"));
        assert_eq!(mime_type_from_extension("txt"), None);
    }

    #[test]
    fn test_solid_bitmap() {
        let bitmap = Bitmap::solid(3, 2, [255, 0, 0, 255], BitmapFormat::Png);
        assert!(bitmap.is_consistent());
        assert_eq!(&bitmap.pixels[4..8], &[255, 0, 0, 255]);
    }
}
