use std::io::{Cursor, Read, Write};
use std::time::{Duration, SystemTime};

use chrono::{TimeZone, Utc};
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use slimzip_analyze::{ArchivePipeline, CleanupConfig};
use slimzip_core::ArchiveError;

/// Build an in-memory zip from (path, bytes, mtime) triples.
fn build_zip(entries: &[(&str, &[u8], Option<zip::DateTime>)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (path, bytes, mtime) in entries {
        // Pin the timestamp to the format default when absent so the
        // fixtures do not pick up the wall clock.
        let options = SimpleFileOptions::default()
            .last_modified_time(mtime.unwrap_or_default());
        writer.start_file(*path, options).unwrap();
        writer.write_all(bytes).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn zdate(year: u16, month: u8, day: u8) -> zip::DateTime {
    zip::DateTime::from_date_and_time(year, month, day, 12, 0, 0).unwrap()
}

fn reference(year: i32, month: u32, day: u32) -> SystemTime {
    let secs = Utc
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .unwrap()
        .timestamp() as u64;
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

/// Pipeline with a pinned reference time so staleness is reproducible.
fn pipeline_at(year: i32, month: u32, day: u32) -> ArchivePipeline {
    let config = CleanupConfig::builder()
        .reference_time(reference(year, month, day))
        .build()
        .unwrap();
    ArchivePipeline::with_config(config)
}

#[test]
fn test_end_to_end_duplicate_and_screenshot() {
    // Spec scenario: a unique recent file, a byte-identical copy, and a
    // recent screenshot-named image.
    let png = vec![0x89u8; 5 * 1024 * 1024];
    let archive = build_zip(&[
        ("a.txt", b"0123456789", Some(zdate(2026, 7, 1))),
        ("b.txt", b"0123456789", Some(zdate(2026, 7, 1))),
        ("IMG_0001.png", &png, Some(zdate(2026, 7, 1))),
    ]);

    let output = pipeline_at(2026, 8, 1).run(&archive).unwrap();
    let report = &output.report;

    assert_eq!(report.total_files_analyzed, 3);
    assert_eq!(report.total_files_removed, 2);
    assert_eq!(report.duplicates.count, 1);
    assert_eq!(report.duplicates.bytes, 10);
    assert_eq!(report.screenshots.count, 1);
    assert_eq!(report.stale.count, 0);
    assert_eq!(output.kept_paths, vec!["a.txt"]);

    // The reduced archive holds exactly a.txt with its original bytes.
    let mut reduced = ZipArchive::new(Cursor::new(output.archive.as_slice())).unwrap();
    assert_eq!(reduced.len(), 1);
    let mut contents = Vec::new();
    reduced
        .by_name("a.txt")
        .unwrap()
        .read_to_end(&mut contents)
        .unwrap();
    assert_eq!(contents, b"0123456789");
}

#[test]
fn test_duplicate_wins_over_stale() {
    // b.txt is both a copy of a.txt and far past the stale threshold;
    // it must be attributed to the duplicate count only.
    let archive = build_zip(&[
        ("a.txt", b"shared bytes", Some(zdate(2026, 7, 1))),
        ("b.txt", b"shared bytes", Some(zdate(2014, 1, 1))),
    ]);

    let output = pipeline_at(2026, 8, 1).run(&archive).unwrap();
    let report = &output.report;

    assert_eq!(report.duplicates.count, 1);
    assert_eq!(report.stale.count, 0);
    assert_eq!(output.kept_paths, vec!["a.txt"]);
}

#[test]
fn test_stale_entries_removed() {
    let archive = build_zip(&[
        ("fresh.txt", b"fresh", Some(zdate(2026, 7, 1))),
        ("ancient.txt", b"ancient", Some(zdate(2015, 3, 3))),
        ("undated.txt", b"undated", None),
    ]);

    let output = pipeline_at(2026, 8, 1).run(&archive).unwrap();
    let report = &output.report;

    assert_eq!(report.stale.count, 1);
    assert_eq!(report.stale.bytes, 7);
    // Entries without a recorded mtime are never stale.
    assert_eq!(output.kept_paths, vec!["fresh.txt", "undated.txt"]);
}

#[test]
fn test_oversized_entries_are_retained() {
    let config = CleanupConfig::builder()
        .reference_time(reference(2026, 8, 1))
        .large_file_threshold(16u64)
        .build()
        .unwrap();
    let pipeline = ArchivePipeline::with_config(config);

    let archive = build_zip(&[
        ("big.dat", b"this entry is larger than sixteen bytes", Some(zdate(2026, 7, 1))),
        ("small.dat", b"tiny", Some(zdate(2026, 7, 1))),
    ]);

    let output = pipeline.run(&archive).unwrap();
    let report = &output.report;

    assert_eq!(report.oversized.count, 1);
    assert_eq!(report.total_files_removed, 0);
    assert_eq!(output.kept_paths, vec!["big.dat", "small.dat"]);
}

#[test]
fn test_empty_archive_is_valid() {
    let archive = build_zip(&[]);
    let output = pipeline_at(2026, 8, 1).run(&archive).unwrap();
    let report = &output.report;

    assert_eq!(report.total_files_analyzed, 0);
    assert_eq!(report.original_size_mb, 0.0);
    assert_eq!(report.reduction_percentage, 0.0);
    assert!(output.kept_paths.is_empty());

    // The reduced archive is still a readable (empty) zip.
    let reduced = ZipArchive::new(Cursor::new(output.archive.as_slice())).unwrap();
    assert_eq!(reduced.len(), 0);
}

#[test]
fn test_corrupt_archive_fails_whole_run() {
    let result = pipeline_at(2026, 8, 1).run(b"definitely not a zip");
    assert!(matches!(result, Err(ArchiveError::CorruptArchive { .. })));
}

#[test]
fn test_pipeline_is_deterministic() {
    let archive = build_zip(&[
        ("report.pdf", b"pdf body", Some(zdate(2025, 2, 2))),
        ("copy.pdf", b"pdf body", Some(zdate(2025, 2, 3))),
        ("Screenshot.png", b"pixels", Some(zdate(2026, 6, 6))),
        ("song.mp3", b"audio frames", Some(zdate(2026, 1, 1))),
    ]);

    let pipeline = pipeline_at(2026, 8, 1);
    let first = pipeline.run(&archive).unwrap();
    let second = pipeline.run(&archive).unwrap();

    assert_eq!(first.kept_paths, second.kept_paths);
    assert_eq!(first.archive, second.archive);
    assert_eq!(
        serde_json::to_string(&first.report).unwrap(),
        serde_json::to_string(&second.report).unwrap()
    );
}

#[test]
fn test_report_category_breakdown_from_kept_entries() {
    let archive = build_zip(&[
        ("movie.mp4", &[0u8; 4096], Some(zdate(2026, 1, 1))),
        ("doc.pdf", &[1u8; 1024], Some(zdate(2026, 1, 1))),
        ("Screenshot.png", &[2u8; 8192], Some(zdate(2026, 1, 1))),
    ]);

    let output = pipeline_at(2026, 8, 1).run(&archive).unwrap();
    let categories = &output.report.categories;

    // The removed screenshot contributes nothing to the breakdown.
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].category.to_string(), "Videos");
    assert_eq!(categories[0].bytes, 4096);
    assert_eq!(categories[1].category.to_string(), "Documents");
}

#[test]
fn test_reduction_percentage_matches_sizes() {
    let archive = build_zip(&[
        ("keep.bin", &[0u8; 750], Some(zdate(2026, 1, 1))),
        ("dupe.bin", &[0u8; 750], Some(zdate(2026, 1, 1))),
    ]);

    let output = pipeline_at(2026, 8, 1).run(&archive).unwrap();
    let report = &output.report;

    assert_eq!(report.original_size_bytes, 1500);
    assert_eq!(report.cleaned_size_bytes, 750);
    assert_eq!(report.reduction_percentage, 50.0);
}
