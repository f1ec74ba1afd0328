// logtally - core/filter.rs
//
// Severity filtering over a record set.
// Core layer: pure logic, no I/O.

use crate::core::model::LogRecord;

/// Select the records whose level matches `level`, case-insensitively.
///
/// Both sides are lowercased before comparison, so filtering by `"info"`
/// and by `"INFO"` yields the same result set. The output is an
/// order-preserving subsequence of the input; no match is an empty vec,
/// not an error.
pub fn filter_by_level(records: &[LogRecord], level: &str) -> Vec<LogRecord> {
    let wanted = level.to_lowercase();
    records
        .iter()
        .filter(|record| record.level.to_lowercase() == wanted)
        .cloned()
        .collect()
}
