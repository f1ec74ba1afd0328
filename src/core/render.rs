// logtally - core/render.rs
//
// Text rendering: reassemble a record into its canonical line form, and
// lay out the per-level statistics as a two-column table.
// Core layer: produces strings only; the CLI decides where they go.

use crate::core::model::{LevelCounts, LogRecord};
use crate::util::constants::{COUNT_HEADER, LEVEL_COLUMN_WIDTH, LEVEL_HEADER};
use std::fmt::Write;

/// Render a record back into its canonical line form: the four fields in
/// order, joined by single spaces.
///
/// For any record the parser produced from a line with single-space
/// separators and no leading/trailing whitespace, this is the exact
/// inverse of parsing. A source line with irregular spacing between the
/// first three fields parses fine but comes back normalised to single
/// spaces; the message's own internal spacing is preserved verbatim
/// because it was captured as one unsplit remainder.
pub fn record_to_line(record: &LogRecord) -> String {
    format!(
        "{} {} {} {}",
        record.date, record.time, record.level, record.message
    )
}

/// Render level counts as a two-column table: header row, separator row,
/// then one row per level in the counts' own (first-seen) order.
///
/// The level column has a fixed width; longer labels widen their row
/// rather than being truncated. Returns the table without a trailing
/// newline.
pub fn render_counts_table(counts: &LevelCounts) -> String {
    let mut out = String::new();
    let width = LEVEL_COLUMN_WIDTH;

    let _ = writeln!(out, "{LEVEL_HEADER:<width$} | {COUNT_HEADER}");
    let _ = writeln!(
        out,
        "{}-|-{}",
        "-".repeat(width),
        "-".repeat(COUNT_HEADER.len())
    );
    for (level, count) in counts.iter() {
        let _ = writeln!(out, "{level:<width$} | {count}");
    }

    // Drop the final newline so callers control line termination.
    out.pop();
    out
}
