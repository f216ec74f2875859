//! Error types for wordhtml library.

use std::io;
use thiserror::Error;

/// Result type alias for wordhtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during HTML export.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The writer was asked to render without a document bound to it.
    #[error("No document assigned")]
    NoDocument,

    /// Error opening or reading a zip container.
    #[error("Archive error: {0}")]
    Archive(String),

    /// Error generating or encoding image data.
    #[error("Image error: {0}")]
    Image(String),

    /// Error serializing or deserializing the document model.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Archive(err.to_string()),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            _ => Error::Image(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
