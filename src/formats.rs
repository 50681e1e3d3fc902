//! Image format utilities and type-safe format handling
//!
//! Target formats are parsed from the user-supplied string once per file, so an
//! unsupported value fails that file rather than the whole run.

use crate::constants::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{CompressionError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Output formats a batch can convert to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    /// JPEG written with a `.jpg` extension
    Jpg,
    /// JPEG written with a `.jpeg` extension
    Jpeg,
    /// PNG, optimized with oxipng
    Png,
    /// Lossy WebP
    WebP,
}

impl TargetFormat {
    /// Returns the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::Jpg => "jpg",
            TargetFormat::Jpeg => "jpeg",
            TargetFormat::Png => "png",
            TargetFormat::WebP => "webp",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetFormat::Jpg | TargetFormat::Jpeg => "JPEG",
            TargetFormat::Png => "PNG",
            TargetFormat::WebP => "WebP",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TargetFormat {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jpg" => Ok(TargetFormat::Jpg),
            "jpeg" => Ok(TargetFormat::Jpeg),
            "png" => Ok(TargetFormat::Png),
            "webp" => Ok(TargetFormat::WebP),
            _ => Err(CompressionError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Check if a file path has one of the recognized image extensions
///
/// # Arguments
/// * `path` - The file path to check
///
/// # Returns
/// * `true` if the extension is jpg, jpeg, png or webp in any letter case
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}
