//! Image materialization: resolve an image source to bytes and embed them
//! as a base64 data URI.

use crate::error::{Error, Result};
use crate::model::{
    detect_mime_type, mime_type_from_extension, Bitmap, BitmapFormat, Image, ImageSource,
};
use base64::Engine;
use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use super::temp::{TempArea, TempStorage};

/// MIME type used when nothing better is known.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// An image ready to be embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedImage {
    /// Resolved MIME type
    pub mime_type: String,

    /// `data:{mime};base64,{payload}` URI
    pub data_uri: String,

    /// Size of the raw image data in bytes
    pub byte_len: usize,
}

/// Resolves image sources for one render call.
///
/// Archive entries are extracted into a temp area acquired on first use and
/// released by [`ImageMaterializer::finish`] (or on drop).
pub struct ImageMaterializer<'a> {
    storage: &'a dyn TempStorage,
    area: Option<TempArea>,
    line_length: Option<usize>,
}

impl<'a> ImageMaterializer<'a> {
    /// Create a materializer using the given temp storage.
    pub fn new(storage: &'a dyn TempStorage, line_length: Option<usize>) -> Self {
        Self {
            storage,
            area: None,
            line_length,
        }
    }

    /// Resolve an image to a data URI.
    ///
    /// Returns `None` when the bytes cannot be obtained; the failure is
    /// logged and never propagated.
    pub fn materialize(&mut self, image: &Image) -> Option<MaterializedImage> {
        match self.read_bytes(&image.source) {
            Ok(bytes) => {
                let mime_type = resolve_mime_type(image, &bytes);
                let data_uri = data_uri(&mime_type, &bytes, self.line_length);
                Some(MaterializedImage {
                    mime_type,
                    data_uri,
                    byte_len: bytes.len(),
                })
            }
            Err(e) => {
                log::warn!("Failed to materialize image {}: {}", describe(&image.source), e);
                None
            }
        }
    }

    /// Hand the temp area back to its storage, if one was acquired.
    pub fn finish(self) {
        if let Some(area) = self.area {
            if let Err(e) = self.storage.release(area) {
                log::warn!("Failed to release temp area: {}", e);
            }
        }
    }

    fn read_bytes(&mut self, source: &ImageSource) -> Result<Vec<u8>> {
        match source {
            ImageSource::Path(path) => Ok(fs::read(path)?),
            ImageSource::Generated(bitmap) => encode_bitmap(bitmap),
            ImageSource::Archive { archive, entry } => {
                let extracted = self.extract_entry(archive, entry)?;
                Ok(fs::read(extracted)?)
            }
        }
    }

    /// Extract one archive entry into the temp area and return its path.
    fn extract_entry(&mut self, archive: &Path, entry: &str) -> Result<PathBuf> {
        let file = File::open(archive)?;
        let mut zip = zip::ZipArchive::new(file)?;
        let mut zipped = zip.by_name(entry).map_err(|_| {
            Error::Archive(format!("entry {} not found in {}", entry, archive.display()))
        })?;

        let relative = zipped
            .enclosed_name()
            .map(|name| name.to_path_buf())
            .ok_or_else(|| Error::Archive(format!("unsafe entry name: {}", entry)))?;

        let target = self.area()?.path().join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&target)?;
        io::copy(&mut zipped, &mut out)?;

        log::debug!("Extracted {} to {}", entry, target.display());
        Ok(target)
    }

    fn area(&mut self) -> Result<&TempArea> {
        let area = match self.area.take() {
            Some(area) => area,
            None => self.storage.acquire()?,
        };
        Ok(self.area.insert(area))
    }
}

/// Encode a generated bitmap in memory.
pub fn encode_bitmap(bitmap: &Bitmap) -> Result<Vec<u8>> {
    if !bitmap.is_consistent() {
        return Err(Error::Image(format!(
            "pixel buffer holds {} bytes, {}x{} RGBA needs {}",
            bitmap.pixels.len(),
            bitmap.width,
            bitmap.height,
            bitmap.width as usize * bitmap.height as usize * 4
        )));
    }

    let buffer = image::RgbaImage::from_raw(bitmap.width, bitmap.height, bitmap.pixels.clone())
        .ok_or_else(|| Error::Image("invalid bitmap dimensions".to_string()))?;
    let rgba = image::DynamicImage::ImageRgba8(buffer);

    let (image, format) = match bitmap.format {
        BitmapFormat::Png => (rgba, image::ImageFormat::Png),
        // JPEG has no alpha channel
        BitmapFormat::Jpeg => (
            image::DynamicImage::ImageRgb8(rgba.to_rgb8()),
            image::ImageFormat::Jpeg,
        ),
        BitmapFormat::Gif => (rgba, image::ImageFormat::Gif),
        BitmapFormat::Bmp => (rgba, image::ImageFormat::Bmp),
    };

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), format)?;
    Ok(bytes)
}

/// Build a base64 data URI, optionally split into CRLF-separated lines.
pub fn data_uri(mime_type: &str, bytes: &[u8], line_length: Option<usize>) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    let payload = match line_length {
        Some(n) if n > 0 && encoded.len() > n => chunk_lines(&encoded, n),
        _ => encoded,
    };
    format!("data:{};base64,{}", mime_type, payload)
}

fn chunk_lines(encoded: &str, line_length: usize) -> String {
    // base64 output is ASCII, so byte chunks are valid UTF-8
    encoded
        .as_bytes()
        .chunks(line_length)
        .map(|chunk| String::from_utf8_lossy(chunk))
        .collect::<Vec<_>>()
        .join("\r\n")
}

fn resolve_mime_type(image: &Image, bytes: &[u8]) -> String {
    if let Some(mime) = image.mime_type.as_deref().filter(|m| !m.is_empty()) {
        return mime.to_string();
    }
    if let ImageSource::Generated(bitmap) = &image.source {
        return bitmap.format.mime_type().to_string();
    }
    detect_mime_type(bytes)
        .or_else(|| {
            image
                .source
                .extension()
                .and_then(|ext| mime_type_from_extension(&ext))
        })
        .unwrap_or(FALLBACK_MIME_TYPE)
        .to_string()
}

fn describe(source: &ImageSource) -> String {
    match source {
        ImageSource::Path(path) => path.display().to_string(),
        ImageSource::Generated(bitmap) => {
            format!("<generated {}x{}>", bitmap.width, bitmap.height)
        }
        ImageSource::Archive { archive, entry } => {
            format!("{}#{}", archive.display(), entry)
        }
    }
}
