// logtally - tests/e2e_pipeline.rs
//
// End-to-end tests for the analysis pipeline.
//
// These tests exercise the real filesystem and the full path from a raw
// log file on disk to statistics, filtered record listings and exports —
// no mocks, no stubs.

use logtally::core::{export, filter, loader, render, stats};
use logtally::util::error::TallyError;
use std::fs;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

// =============================================================================
// Load -> count -> filter -> render E2E
// =============================================================================

/// The sample fixture has four lines of which one is malformed: loading
/// yields three records, counting yields INFO=2 / ERROR=1, filtering by
/// "error" (lowercase) yields the single ERROR record, and rendering it
/// reproduces the original line.
#[test]
fn e2e_sample_file_full_pipeline() {
    let records = loader::load_logs(&fixture("sample.log")).unwrap();
    assert_eq!(records.len(), 3, "malformed line should be dropped");

    let counts = stats::count_by_level(&records);
    assert_eq!(counts.get("INFO"), 2);
    assert_eq!(counts.get("ERROR"), 1);
    assert_eq!(counts.total(), 3);

    let errors = filter::filter_by_level(&records, "error");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        render::record_to_line(&errors[0]),
        "2024-01-22 08:31:45 ERROR Disk write failed."
    );
}

/// Loading preserves file order across levels.
#[test]
fn e2e_record_order_matches_file_order() {
    let records = loader::load_logs(&fixture("sample.log")).unwrap();
    let messages: Vec<_> = records.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "User logged in successfully.",
            "Disk write failed.",
            "Session closed."
        ]
    );
}

/// The rendered statistics table lists each level with its count.
#[test]
fn e2e_counts_table_rendering() {
    let records = loader::load_logs(&fixture("sample.log")).unwrap();
    let table = render::render_counts_table(&stats::count_by_level(&records));

    let lines: Vec<_> = table.lines().collect();
    assert_eq!(lines.len(), 4, "header, separator, two level rows: {table}");
    assert!(lines[0].contains("Level") && lines[0].contains("Count"));
    assert!(lines[2].starts_with("INFO") && lines[2].ends_with("| 2"));
    assert!(lines[3].starts_with("ERROR") && lines[3].ends_with("| 1"));
}

// =============================================================================
// Edge conditions
// =============================================================================

/// A zero-byte file loads as an empty record set, not an error.
#[test]
fn e2e_empty_file_yields_empty_record_set() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.log");
    fs::write(&path, "").unwrap();

    let records = loader::load_logs(&path).unwrap();
    assert!(records.is_empty());
}

/// A nonexistent path fails with an I/O error and no partial result.
#[test]
fn e2e_nonexistent_file_is_io_failure() {
    let result = loader::load_logs(&fixture("does-not-exist.log"));
    assert!(
        matches!(result, Err(TallyError::Io { .. })),
        "expected Io error, got {result:?}"
    );
}

/// Filtering by an unknown level is an empty result, not an error, and
/// filtering is idempotent.
#[test]
fn e2e_unknown_level_filter_is_empty() {
    let records = loader::load_logs(&fixture("sample.log")).unwrap();
    let none = filter::filter_by_level(&records, "critical");
    assert!(none.is_empty());

    let errors = filter::filter_by_level(&records, "ERROR");
    assert_eq!(filter::filter_by_level(&errors, "ERROR"), errors);
}

// =============================================================================
// Export E2E
// =============================================================================

/// Exporting the filtered set to CSV produces a header plus one row per
/// record; JSON export round-trips through serde_json.
#[test]
fn e2e_export_filtered_records() {
    let records = loader::load_logs(&fixture("sample.log")).unwrap();
    let infos = filter::filter_by_level(&records, "info");
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("infos.csv");
    let written = export::export_to_path(&infos, &csv_path).unwrap();
    assert_eq!(written, 2);
    let csv_content = fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv_content.lines().count(), 3);
    assert!(csv_content.starts_with("date,time,level,message"));

    let json_path = dir.path().join("infos.json");
    export::export_to_path(&infos, &json_path).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[0]["level"], "INFO");
}
