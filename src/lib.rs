pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod processing;
pub mod report;
pub mod stats;
pub mod utils;

pub use batch::{
    batch_compress, compress_file, destination_path, discover_images, run_pipeline, BatchConfig,
    RunOutcome,
};
pub use error::{CompressionError, Result};
pub use formats::{is_image_file, TargetFormat};
pub use processing::{encode_image, load_image, CompressionOptions, ImageCodec, ImageRsCodec};
pub use report::{BatchEvent, ConsoleReporter, ProgressSink, SilentSink};
pub use stats::{CompressionResult, Summary};
