// logtally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// CLI dependencies. These types are the shared vocabulary across
// the parsing, aggregation, filtering and rendering stages.

use serde::Serialize;

// =============================================================================
// Log Record (normalised output of parsing)
// =============================================================================

/// A single validated log line, split into its four canonical fields.
///
/// A `LogRecord` exists only if all four fields were present in the source
/// line, in this exact order, and each matched its lexical shape. It is
/// created by `parser::parse_line` and never mutated afterwards; every
/// later stage takes records by reference and returns new values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Calendar date in `YYYY-MM-DD` textual form. Shape-validated only:
    /// month 13 is accepted, semantic calendar checks are out of scope.
    pub date: String,

    /// Time of day in `HH:MM:SS` textual form. Shape-validated only.
    pub time: String,

    /// Severity label, one non-whitespace token, case preserved as written.
    pub level: String,

    /// Remainder of the line. Never empty; may contain any characters,
    /// including further whitespace (it absorbs the rest of the line).
    pub message: String,
}

// =============================================================================
// Level Counts (output of aggregation)
// =============================================================================

/// Frequency of records per severity label.
///
/// Keys are the level strings exactly as they appeared in the source,
/// case-sensitive: `INFO` and `info` are distinct entries. Iteration
/// order is first-seen order during aggregation, which makes rendering
/// deterministic for a given input without imposing any sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts {
    entries: Vec<(String, u64)>,
}

impl LevelCounts {
    /// Add one occurrence of `level`, inserting it on first sight.
    ///
    /// Linear scan: the number of distinct levels in practice is a
    /// handful, far below the point where a map would pay off.
    pub fn increment(&mut self, level: &str) {
        if let Some((_, count)) = self.entries.iter_mut().find(|(l, _)| l == level) {
            *count += 1;
        } else {
            self.entries.push((level.to_string(), 1));
        }
    }

    /// Count for an exact (case-sensitive) level, 0 if absent.
    pub fn get(&self, level: &str) -> u64 {
        self.entries
            .iter()
            .find(|(l, _)| l == level)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// Iterate entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Number of distinct levels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts. Equals the number of records that were
    /// aggregated (count conservation).
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| *c).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_preserves_first_seen_order() {
        let mut counts = LevelCounts::default();
        counts.increment("ERROR");
        counts.increment("INFO");
        counts.increment("ERROR");
        let order: Vec<_> = counts.iter().map(|(l, _)| l.to_string()).collect();
        assert_eq!(order, vec!["ERROR", "INFO"]);
        assert_eq!(counts.get("ERROR"), 2);
        assert_eq!(counts.get("INFO"), 1);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut counts = LevelCounts::default();
        counts.increment("INFO");
        counts.increment("info");
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("INFO"), 1);
        assert_eq!(counts.get("info"), 1);
    }

    #[test]
    fn test_get_absent_level_is_zero() {
        let counts = LevelCounts::default();
        assert_eq!(counts.get("DEBUG"), 0);
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }
}
