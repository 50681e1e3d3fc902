//! Size arithmetic shared by the per-file lines and the batch summary

use crate::constants::BYTES_PER_MB;

/// Convert a byte count to megabytes (1 MB = 1024 * 1024 bytes)
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Format a byte count as megabytes with two decimals, e.g. `"1.50 MB"`
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes_to_mb(bytes))
}

/// Format a signed byte delta as megabytes; negative when the output grew
pub fn format_signed_mb(bytes: i64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}

/// Bytes saved going from `original` to `compressed`, negative if the file grew
pub fn saved_bytes(original: u64, compressed: u64) -> i64 {
    // i128 keeps the subtraction exact for any pair of u64 sizes
    let delta = original as i128 - compressed as i128;
    delta.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Percentage of `original` that was saved
///
/// # Returns
/// * `None` when `original` is zero, since there is nothing to take a share of
/// * `Some(pct)` otherwise; negative when the output is larger than the input
pub fn saved_percentage(original: u64, saved: i64) -> Option<f64> {
    if original == 0 {
        return None;
    }
    Some(saved as f64 / original as f64 * 100.0)
}

/// Render an optional percentage for console output
pub fn format_percentage(percentage: Option<f64>) -> String {
    match percentage {
        Some(pct) => format!("{:.2}%", pct),
        None => "n/a".to_string(),
    }
}
