//! Per-file results and the batch summary folded from them.

use crate::utils::{format_mb, format_percentage, format_signed_mb, saved_bytes, saved_percentage};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Outcome of one successfully compressed file, sizes taken from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub original_size: u64,
    pub compressed_size: u64,
}

impl CompressionResult {
    /// Negative when the encoded file is larger than the source.
    pub fn saved_size(&self) -> i64 {
        saved_bytes(self.original_size, self.compressed_size)
    }

    pub fn saved_percentage(&self) -> Option<f64> {
        saved_percentage(self.original_size, self.saved_size())
    }

    pub fn file_name(&self) -> String {
        display_name(&self.source)
    }
}

impl fmt::Display for CompressionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} (saved {})",
            self.file_name(),
            format_mb(self.original_size),
            format_mb(self.compressed_size),
            format_signed_mb(self.saved_size())
        )
    }
}

/// Aggregate of a finished batch.
///
/// `total_images` counts every attempted file; the byte totals only cover the
/// files that succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    total_images: usize,
    succeeded: usize,
    total_original_size: u64,
    total_compressed_size: u64,
    elapsed: Duration,
}

impl Summary {
    /// Folds the successful results of a batch of `attempted` files.
    pub fn from_results<'a, I>(attempted: usize, results: I, elapsed: Duration) -> Self
    where
        I: IntoIterator<Item = &'a CompressionResult>,
    {
        let (succeeded, total_original_size, total_compressed_size) = results.into_iter().fold(
            (0usize, 0u64, 0u64),
            |(count, original, compressed), result| {
                (
                    count + 1,
                    original.saturating_add(result.original_size),
                    compressed.saturating_add(result.compressed_size),
                )
            },
        );

        Self {
            total_images: attempted,
            succeeded,
            total_original_size,
            total_compressed_size,
            elapsed,
        }
    }

    pub fn total_images(&self) -> usize {
        self.total_images
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn failed(&self) -> usize {
        self.total_images.saturating_sub(self.succeeded)
    }

    pub fn total_original_size(&self) -> u64 {
        self.total_original_size
    }

    pub fn total_compressed_size(&self) -> u64 {
        self.total_compressed_size
    }

    pub fn total_saved_size(&self) -> i64 {
        saved_bytes(self.total_original_size, self.total_compressed_size)
    }

    /// `None` when nothing with a non-zero size was compressed.
    pub fn percentage_saved(&self) -> Option<f64> {
        saved_percentage(self.total_original_size, self.total_saved_size())
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// True when files were attempted and every one of them failed.
    pub fn is_total_failure(&self) -> bool {
        self.total_images > 0 && self.succeeded == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📊 Batch Compression Summary:")?;
        writeln!(f, "  📁 Total Images: {}", self.total_images)?;
        writeln!(f, "  ✅ Succeeded: {}", self.succeeded)?;
        writeln!(f, "  ❌ Failed: {}", self.failed())?;
        writeln!(
            f,
            "  📦 Total original size: {}",
            format_mb(self.total_original_size)
        )?;
        writeln!(
            f,
            "  📦 Total compressed size: {}",
            format_mb(self.total_compressed_size)
        )?;
        writeln!(
            f,
            "  🎯 Total saved: {} ({})",
            format_signed_mb(self.total_saved_size()),
            format_percentage(self.percentage_saved())
        )?;
        write!(f, "  ⏱️  Elapsed: {:.2}s", self.elapsed.as_secs_f64())
    }
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
