use std::num::NonZeroU8;

pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 0;
pub const MAX_QUALITY: u8 = 100;

pub const DEFAULT_FORMAT: &str = "webp";

/// Extensions picked up from the source directory, compared lowercase.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

// PNG quality thresholds: quality selects deflate effort, never pixel loss
pub const PNG_ZOPFLI_QUALITY: u8 = 90;
pub const PNG_HIGH_EFFORT_QUALITY: u8 = 70;
pub const OXIPNG_PRESET: u8 = 4;

pub const ZOPFLI_ITERATIONS: NonZeroU8 = match NonZeroU8::new(15) {
    Some(n) => n,
    None => unreachable!(),
};
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";
pub const PROGRESS_BAR_CHARS: &str = "=>-";
