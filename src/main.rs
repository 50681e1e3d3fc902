use anyhow::{Context, Result};
use clap::Parser;
use dir_squeeze::cli::Args;
use dir_squeeze::logger::{self, Verbosity};
use dir_squeeze::{
    error, run_pipeline, BatchConfig, CompressionOptions, ConsoleReporter, ImageRsCodec,
};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logger::set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    let options = CompressionOptions::new(Some(args.quality), Some(args.ext))?;
    let config = BatchConfig {
        source_dir: args.source_dir,
        export_dir: args.export_dir,
        options,
    };

    let mut reporter = ConsoleReporter::new();
    let outcome = run_pipeline(&config, &ImageRsCodec, &mut reporter)
        .with_context(|| format!("Batch compression of {:?} failed", config.source_dir))?;

    if args.strict && outcome.is_total_failure() {
        error!("No image could be compressed");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
