use crate::constants::{DEFAULT_FORMAT, DEFAULT_QUALITY};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dir-squeeze",
    about = "Batch-convert and compress every image in a directory",
    long_about = "dir-squeeze converts each JPEG, PNG and WebP file at the top level of a directory \
                  into one target format, writes the results to an export directory and reports \
                  how much space every file and the whole batch saved. Files are processed one \
                  at a time; a file that fails is reported and skipped.",
    version,
    after_help = "EXAMPLES:\n  \
    dir-squeeze -s ./photos -e ./photos-small\n  \
    dir-squeeze --sourceDir ./photos --exportDir ./out -q 60 -t jpg\n  \
    dir-squeeze -s ./scans -e ./scans-png -t png -q 95 --strict"
)]
pub struct Args {
    #[arg(
        short = 's',
        long = "sourceDir",
        visible_alias = "source-dir",
        value_name = "DIR",
        help = "Directory to scan for images"
    )]
    pub source_dir: PathBuf,

    #[arg(
        short = 'e',
        long = "exportDir",
        visible_alias = "export-dir",
        value_name = "DIR",
        help = "Directory for the compressed images (created if missing)"
    )]
    pub export_dir: PathBuf,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        help = "Encoder quality (0-100)",
        long_help = "Encoder quality from 0 to 100. For JPEG and WebP it is the lossy quality. \
                     For PNG it picks the optimization effort: >=90 uses Zopfli, >=70 uses high \
                     libdeflate compression, lower values use fast compression."
    )]
    pub quality: u8,

    #[arg(
        short = 't',
        long,
        default_value = DEFAULT_FORMAT,
        value_name = "FORMAT",
        help = "Output format (jpg, jpeg, png, webp)",
        long_help = "Format every image is converted to. The output file keeps the source name \
                     with this extension. Unsupported values make every file fail."
    )]
    pub ext: String,

    #[arg(
        long,
        help = "Exit with an error when no image could be compressed"
    )]
    pub strict: bool,

    #[arg(long, help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print encoder details for every file")]
    pub verbose: bool,
}
