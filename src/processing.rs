use crate::constants::{
    DEFAULT_FORMAT, DEFAULT_QUALITY, LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL, MAX_QUALITY,
    MIN_QUALITY, OXIPNG_PRESET, PNG_HIGH_EFFORT_QUALITY, PNG_ZOPFLI_QUALITY, ZOPFLI_ITERATIONS,
};
use crate::error::{CompressionError, Result};
use crate::formats::TargetFormat;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use oxipng::{Deflaters, Options};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Encoder settings shared by every file of a batch.
///
/// `format` stays a string until a file is processed, so an unsupported target
/// surfaces as a per-file failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionOptions {
    pub quality: u8,
    pub format: String,
}

impl CompressionOptions {
    pub fn new(quality: Option<u8>, format: Option<String>) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(CompressionError::InvalidQuality(quality));
        }

        Ok(Self {
            quality,
            format: format.unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
        })
    }

    pub fn target_format(&self) -> Result<TargetFormat> {
        self.format.parse()
    }
}

/// The encode capability the batch delegates to.
///
/// Implementations read `source`, encode it as `format` at `quality` and leave the
/// result at `destination`. They must not touch `destination` when they fail before
/// encoding.
pub trait ImageCodec {
    fn encode(
        &self,
        source: &Path,
        destination: &Path,
        format: TargetFormat,
        quality: u8,
    ) -> Result<()>;
}

/// Codec backed by the `image` crate, with oxipng for PNG and libwebp for WebP.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageRsCodec;

impl ImageCodec for ImageRsCodec {
    fn encode(
        &self,
        source: &Path,
        destination: &Path,
        format: TargetFormat,
        quality: u8,
    ) -> Result<()> {
        let img = load_image(source)?;
        let encoded = encode_image(&img, format, quality)?;
        fs::write(destination, encoded)?;
        Ok(())
    }
}

/// Decodes an image, trusting its content over its extension when they disagree.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(img)
}

/// Encodes a decoded image into the bytes of `format`.
///
/// # Arguments
/// * `img` - The decoded source image
/// * `format` - Target encoding
/// * `quality` - 0-100; lossy quality for JPEG/WebP, deflate effort for PNG
pub fn encode_image(img: &DynamicImage, format: TargetFormat, quality: u8) -> Result<Vec<u8>> {
    match format {
        TargetFormat::Jpg | TargetFormat::Jpeg => encode_jpeg(img, quality),
        TargetFormat::Png => encode_png(img, quality),
        TargetFormat::WebP => encode_webp(img, quality),
    }
}

fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    // JPEG has no alpha channel
    let rgb = img.to_rgb8();
    let mut buffer = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, MAX_QUALITY));
        encoder.encode_image(&rgb)?;
    }
    Ok(buffer)
}

fn encode_png(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    img.write_to(&mut Cursor::new(&mut raw), ImageFormat::Png)?;

    oxipng::optimize_from_memory(&raw, &png_options(quality))
        .map_err(|e| CompressionError::PngOptimization(e.to_string()))
}

fn encode_webp(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let rgba = img.to_rgba8();
    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), rgba.width(), rgba.height());
    let memory = encoder
        .encode_simple(false, f32::from(quality))
        .map_err(|e| CompressionError::WebpEncoding(format!("{:?}", e)))?;
    Ok(memory.to_vec())
}

/// oxipng settings for a quality value: >=90 Zopfli, >=70 strong libdeflate, else fast.
pub fn png_options(quality: u8) -> Options {
    let mut options = Options::from_preset(OXIPNG_PRESET);

    options.deflate = if quality >= PNG_ZOPFLI_QUALITY {
        Deflaters::Zopfli {
            iterations: ZOPFLI_ITERATIONS,
        }
    } else if quality >= PNG_HIGH_EFFORT_QUALITY {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        }
    };

    options
}
