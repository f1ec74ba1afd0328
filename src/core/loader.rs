// logtally - core/loader.rs
//
// Whole-file loading: read a log file as UTF-8 text and parse every line.
// Malformed lines are dropped silently — that is the format contract, not
// an error condition. An unreadable file, on the other hand, fails the
// whole call; there is no partial result.

use crate::core::model::LogRecord;
use crate::core::parser::parse_line;
use crate::util::error::TallyError;
use std::fs;
use std::path::Path;

/// Load all well-formed records from the log file at `path`, in file order.
///
/// Returns `TallyError::Io` when the file cannot be opened, read, or
/// decoded as UTF-8. An empty file (or a file with no matching lines)
/// yields an empty vec, which is a valid non-error outcome the caller can
/// distinguish from I/O failure.
pub fn load_logs(path: &Path) -> Result<Vec<LogRecord>, TallyError> {
    let content = fs::read_to_string(path).map_err(|e| TallyError::Io {
        path: path.to_path_buf(),
        operation: "read",
        source: e,
    })?;

    let mut records = Vec::new();
    let mut skipped: u64 = 0;
    // `lines()` strips the trailing terminator (\n or \r\n), which is the
    // contract parse_line expects.
    for line in content.lines() {
        match parse_line(line) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    tracing::debug!(
        file = %path.display(),
        records = records.len(),
        skipped,
        "Log file loaded"
    );

    Ok(records)
}
