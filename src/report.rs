//! Progress events emitted by the batch and the console sink that renders them.

use crate::constants::{PROGRESS_BAR_CHARS, PROGRESS_BAR_TEMPLATE};
use crate::error::CompressionError;
use crate::stats::{display_name, CompressionResult, Summary};
use crate::{error, info, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Events emitted while a batch runs, one per completed file, in completion order.
#[derive(Debug)]
pub enum BatchEvent<'a> {
    /// Discovery found nothing to compress; no other event follows.
    NoImages { source_dir: &'a Path },
    Started { total: usize, export_dir: &'a Path },
    /// `destination` was already written earlier in this batch and is about to be
    /// replaced by the output of `source`.
    DestinationReused {
        source: &'a Path,
        destination: &'a Path,
    },
    Compressed(&'a CompressionResult),
    Failed {
        source: &'a Path,
        error: &'a CompressionError,
    },
    Finished(&'a Summary),
}

/// Receiver for batch progress.
pub trait ProgressSink {
    fn on_event(&mut self, event: BatchEvent<'_>);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl ProgressSink for SilentSink {
    fn on_event(&mut self, _event: BatchEvent<'_>) {}
}

/// Renders events as console lines plus an `indicatif` progress bar.
#[derive(Default)]
pub struct ConsoleReporter {
    progress: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn start_progress(&mut self, total: usize) {
        let progress = if crate::logger::is_quiet() {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64)
        };
        let style = ProgressStyle::with_template(PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars(PROGRESS_BAR_CHARS);
        progress.set_style(style);
        self.progress = Some(progress);
    }

    /// Runs `print` with the bar cleared so lines never interleave with it.
    fn print<F: FnOnce()>(&self, print: F) {
        match &self.progress {
            Some(progress) => progress.suspend(print),
            None => print(),
        }
    }

    fn tick(&self, file_name: String) {
        if let Some(progress) = &self.progress {
            progress.inc(1);
            progress.set_message(file_name);
        }
    }
}

impl ProgressSink for ConsoleReporter {
    fn on_event(&mut self, event: BatchEvent<'_>) {
        match event {
            BatchEvent::NoImages { source_dir } => {
                info!("⚠️  No image files found in {:?}", source_dir);
            }
            BatchEvent::Started { total, export_dir } => {
                info!("🚀 Found {} image files to compress", total);
                info!("📁 Output: {:?}", export_dir);
                self.start_progress(total);
            }
            BatchEvent::DestinationReused {
                source,
                destination,
            } => {
                self.print(|| {
                    warn!("{:?} overwrites {:?} written earlier", source, destination);
                });
            }
            BatchEvent::Compressed(result) => {
                self.print(|| {
                    info!("✅ {}", result);
                });
                self.tick(result.file_name());
            }
            BatchEvent::Failed { source, error } => {
                self.print(|| {
                    error!("Failed to compress {:?}: {}", source, error);
                });
                self.tick(display_name(source));
            }
            BatchEvent::Finished(summary) => {
                if let Some(progress) = self.progress.take() {
                    progress.finish_and_clear();
                }
                info!("\n{}", summary);
                if summary.failed() > 0 {
                    warn!("{} of {} files failed", summary.failed(), summary.total_images());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_console_reporter_handles_full_event_sequence() {
        let mut reporter = ConsoleReporter::new();
        let result = CompressionResult {
            source: PathBuf::from("in/a.jpg"),
            destination: PathBuf::from("out/a.webp"),
            original_size: 2048,
            compressed_size: 1024,
        };
        let failure = CompressionError::UnsupportedFormat("bmp".to_string());
        let summary = Summary::from_results(2, [&result], Duration::from_millis(10));

        reporter.on_event(BatchEvent::Started {
            total: 2,
            export_dir: Path::new("out"),
        });
        assert!(reporter.progress.is_some());

        reporter.on_event(BatchEvent::Compressed(&result));
        reporter.on_event(BatchEvent::DestinationReused {
            source: Path::new("in/a.png"),
            destination: Path::new("out/a.webp"),
        });
        reporter.on_event(BatchEvent::Failed {
            source: Path::new("in/b.png"),
            error: &failure,
        });
        assert_eq!(reporter.progress.as_ref().map(|p| p.position()), Some(2));

        reporter.on_event(BatchEvent::Finished(&summary));
        assert!(reporter.progress.is_none());
    }

    #[test]
    fn test_console_reporter_no_images_does_not_start_progress() {
        let mut reporter = ConsoleReporter::new();
        reporter.on_event(BatchEvent::NoImages {
            source_dir: Path::new("empty"),
        });
        assert!(reporter.progress.is_none());
    }
}
