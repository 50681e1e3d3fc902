use dir_squeeze::batch::destination_path;
use dir_squeeze::formats::{is_image_file, TargetFormat};
use dir_squeeze::processing::CompressionOptions;
use dir_squeeze::stats::{CompressionResult, Summary};
use dir_squeeze::utils::saved_percentage;
use proptest::prelude::*;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

fn result_strategy() -> impl Strategy<Value = CompressionResult> {
    (0u64..50_000_000, 0u64..50_000_000).prop_map(|(original, compressed)| CompressionResult {
        source: PathBuf::from("in/x.jpg"),
        destination: PathBuf::from("out/x.webp"),
        original_size: original,
        compressed_size: compressed,
    })
}

proptest! {
    #[test]
    fn compression_options_quality_in_range(quality in 0u8..=100u8) {
        let options = CompressionOptions::new(Some(quality), None);
        prop_assert!(options.is_ok());
    }

    #[test]
    fn compression_options_rejects_above_hundred(quality in 101u8..=255u8) {
        prop_assert!(CompressionOptions::new(Some(quality), None).is_err());
    }

    #[test]
    fn summary_totals_are_sums_of_successes(
        results in prop::collection::vec(result_strategy(), 0..20),
        extra_failures in 0usize..5
    ) {
        let attempted = results.len() + extra_failures;
        let summary = Summary::from_results(attempted, &results, Duration::ZERO);

        let original: u64 = results.iter().map(|r| r.original_size).sum();
        let saved: i64 = results.iter().map(|r| r.saved_size()).sum();

        prop_assert_eq!(summary.total_images(), attempted);
        prop_assert_eq!(summary.succeeded(), results.len());
        prop_assert_eq!(summary.failed(), extra_failures);
        prop_assert_eq!(summary.total_original_size(), original);
        prop_assert_eq!(summary.total_saved_size(), saved);
    }

    #[test]
    fn percentage_saved_is_always_finite(
        results in prop::collection::vec(result_strategy(), 0..10)
    ) {
        let summary = Summary::from_results(results.len(), &results, Duration::ZERO);
        match summary.percentage_saved() {
            Some(pct) => {
                prop_assert!(pct.is_finite());
                prop_assert!(summary.total_original_size() > 0);
            }
            None => prop_assert_eq!(summary.total_original_size(), 0),
        }
    }

    #[test]
    fn saved_percentage_never_exceeds_hundred(original in 1u64..u32::MAX as u64, compressed in 0u64..u32::MAX as u64) {
        let saved = original as i64 - compressed as i64;
        let pct = saved_percentage(original, saved).unwrap();
        prop_assert!(pct <= 100.0);
    }

    #[test]
    fn is_image_file_recognizes_extensions(
        extension in prop::sample::select(vec!["jpg", "JPG", "jpeg", "Jpeg", "png", "PNG", "webp", "WebP", "gif", "bmp", "tiff", "txt", "pdf"])
    ) {
        let filename = format!("test.{}", extension);
        let expected = matches!(extension.to_lowercase().as_str(), "jpg" | "jpeg" | "png" | "webp");
        prop_assert_eq!(is_image_file(Path::new(&filename)), expected);
    }

    #[test]
    fn destination_replaces_extension(
        stem in "[a-zA-Z0-9_-]{1,16}",
        source_ext in prop::sample::select(vec!["jpg", "jpeg", "png", "webp"]),
        target in prop::sample::select(vec!["jpg", "jpeg", "png", "webp"])
    ) {
        let format = TargetFormat::from_str(target).unwrap();
        let source = PathBuf::from(format!("in/{}.{}", stem, source_ext));
        let destination = destination_path(&source, Path::new("out"), format).unwrap();

        prop_assert_eq!(destination, PathBuf::from(format!("out/{}.{}", stem, target)));
    }

    #[test]
    fn unknown_target_formats_are_rejected(name in "[a-z]{2,5}") {
        prop_assume!(!["jpg", "jpeg", "png", "webp"].contains(&name.as_str()));
        prop_assert!(TargetFormat::from_str(&name).is_err());
    }
}
