use crate::error::{CompressionError, Result};
use crate::formats::{is_image_file, TargetFormat};
use crate::processing::{CompressionOptions, ImageCodec};
use crate::report::{BatchEvent, ProgressSink};
use crate::stats::{CompressionResult, Summary};
use crate::verbose;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Everything a run needs, fixed before the pipeline starts.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub source_dir: PathBuf,
    pub export_dir: PathBuf,
    pub options: CompressionOptions,
}

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The source directory held no recognized images; nothing was written.
    NoImages,
    Completed(Summary),
}

impl RunOutcome {
    pub fn summary(&self) -> Option<&Summary> {
        match self {
            RunOutcome::NoImages => None,
            RunOutcome::Completed(summary) => Some(summary),
        }
    }

    /// True when images were attempted and none of them compressed.
    pub fn is_total_failure(&self) -> bool {
        self.summary().is_some_and(Summary::is_total_failure)
    }
}

/// Discovers images, prepares the export directory and compresses the batch.
///
/// # Returns
/// * `Ok(RunOutcome::NoImages)` - Nothing matched; the export directory is left untouched
/// * `Ok(RunOutcome::Completed(summary))` - The batch ran, possibly with per-file failures
/// * `Err(CompressionError)` - The source directory could not be listed or the export
///   directory could not be created
pub fn run_pipeline(
    config: &BatchConfig,
    codec: &dyn ImageCodec,
    sink: &mut dyn ProgressSink,
) -> Result<RunOutcome> {
    let image_files = discover_images(&config.source_dir)?;

    if image_files.is_empty() {
        sink.on_event(BatchEvent::NoImages {
            source_dir: &config.source_dir,
        });
        return Ok(RunOutcome::NoImages);
    }

    fs::create_dir_all(&config.export_dir).map_err(|source| {
        CompressionError::DirectoryCreationFailed {
            path: config.export_dir.clone(),
            source,
        }
    })?;

    let summary = batch_compress(
        codec,
        &image_files,
        &config.export_dir,
        &config.options,
        sink,
    );
    Ok(RunOutcome::Completed(summary))
}

/// Lists the top level of `source_dir` and keeps the recognized image files.
///
/// Entries come back in directory-listing order. Subdirectories are neither
/// returned nor descended into.
pub fn discover_images(source_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    for entry in WalkDir::new(source_dir).max_depth(1) {
        let entry = entry.map_err(|source| CompressionError::SourceDirectory {
            path: source_dir.to_path_buf(),
            source,
        })?;

        // The root entry's file type is the link itself; `is_dir` follows it.
        if entry.depth() == 0 {
            if !entry.path().is_dir() {
                return Err(CompressionError::NotADirectory(source_dir.to_path_buf()));
            }
            continue;
        }

        let path = entry.path();
        if path.is_file() && is_image_file(path) {
            image_files.push(path.to_path_buf());
        }
    }

    Ok(image_files)
}

/// Compresses `files` one after another, reporting each completion to `sink`.
///
/// A failing file is reported and skipped; it never stops the batch. The summary
/// counts every file in `files` but only sums the sizes of the successes.
///
/// Sources sharing a stem (`a.jpg`, `a.png`) map to the same destination. The later
/// file overwrites the earlier one and a `DestinationReused` event precedes its
/// `Compressed` event.
pub fn batch_compress(
    codec: &dyn ImageCodec,
    files: &[PathBuf],
    export_dir: &Path,
    options: &CompressionOptions,
    sink: &mut dyn ProgressSink,
) -> Summary {
    let start_time = Instant::now();
    sink.on_event(BatchEvent::Started {
        total: files.len(),
        export_dir,
    });

    let mut written: HashSet<PathBuf> = HashSet::new();
    let successes: Vec<CompressionResult> = files
        .iter()
        .filter_map(|source| match compress_file(codec, source, export_dir, options) {
            Ok(result) => {
                if !written.insert(result.destination.clone()) {
                    sink.on_event(BatchEvent::DestinationReused {
                        source: &result.source,
                        destination: &result.destination,
                    });
                }
                sink.on_event(BatchEvent::Compressed(&result));
                Some(result)
            }
            Err(error) => {
                sink.on_event(BatchEvent::Failed {
                    source: source.as_path(),
                    error: &error,
                });
                None
            }
        })
        .collect();

    let summary = Summary::from_results(files.len(), &successes, start_time.elapsed());
    sink.on_event(BatchEvent::Finished(&summary));
    summary
}

/// Compresses a single file into `export_dir`.
///
/// The target format is resolved first, so an unsupported format fails before the
/// codec runs or anything is written. Both sizes are read back from disk.
pub fn compress_file(
    codec: &dyn ImageCodec,
    source: &Path,
    export_dir: &Path,
    options: &CompressionOptions,
) -> Result<CompressionResult> {
    let format = options.target_format()?;
    let destination = destination_path(source, export_dir, format)?;
    let original_size = fs::metadata(source)?.len();

    verbose!(
        "Encoding {:?} -> {:?} as {} (quality {})",
        source,
        destination,
        format,
        options.quality
    );
    codec.encode(source, &destination, format, options.quality)?;

    let compressed_size = fs::metadata(&destination)?.len();
    Ok(CompressionResult {
        source: source.to_path_buf(),
        destination,
        original_size,
        compressed_size,
    })
}

/// `export_dir/<source stem>.<format extension>`; the source extension is replaced.
pub fn destination_path(
    source: &Path,
    export_dir: &Path,
    format: TargetFormat,
) -> Result<PathBuf> {
    let file_stem = source
        .file_stem()
        .ok_or_else(|| CompressionError::InvalidFileName(source.to_path_buf()))?;

    let output_filename = format!("{}.{}", file_stem.to_string_lossy(), format.extension());
    Ok(export_dir.join(output_filename))
}
