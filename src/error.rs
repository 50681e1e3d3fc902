use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("WebP encoding error: {0}")]
    WebpEncoding(String),

    #[error("Invalid quality value: {0}. Must be between 0 and 100")]
    InvalidQuality(u8),

    #[error("Unsupported format: {0}. Expected one of jpg, jpeg, png, webp")]
    UnsupportedFormat(String),

    #[error("Invalid file name: {0}")]
    InvalidFileName(PathBuf),

    #[error("Cannot read source directory {path:?}: {source}")]
    SourceDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Source path is not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("Failed to create output directory {path:?}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CompressionError>;
