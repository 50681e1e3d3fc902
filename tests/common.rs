#![allow(dead_code)]

use image::{ImageBuffer, Rgb, RgbImage};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Noisy RGB pixels, so encoders have real work to do.
pub fn noisy_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let seed = x.wrapping_mul(2_654_435_761).wrapping_add(y.wrapping_mul(40_503));
        Rgb([(seed >> 3) as u8, (seed >> 11) as u8, (seed >> 19) as u8])
    })
}

/// Saves a real image whose encoding follows the extension of `name`.
pub fn create_real_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    noisy_image(width, height).save(&path).unwrap();
    path
}

pub fn create_fake_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    File::create(&path).unwrap().write_all(contents).unwrap();
    path
}

/// A source directory with `a.jpg`, `b.png` and an ignored `c.txt`.
pub fn create_mixed_source(temp_dir: &Path) -> PathBuf {
    let source_dir = temp_dir.join("source");
    std::fs::create_dir(&source_dir).unwrap();

    create_real_image(&source_dir, "a.jpg", 96, 64);
    create_real_image(&source_dir, "b.png", 64, 64);
    create_fake_file(&source_dir, "c.txt", b"not an image");

    source_dir
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn sorted_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
