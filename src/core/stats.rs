// logtally - core/stats.rs
//
// Aggregation: frequency of records per severity label.
// Core layer: pure logic, no I/O.

use crate::core::model::{LevelCounts, LogRecord};

/// Count records grouped by their exact `level` string.
///
/// Case-sensitive, no normalisation: `INFO` and `info` are distinct keys.
/// Entries appear in first-seen order, so the result is deterministic for
/// a given record set. Empty input yields empty counts.
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    let mut counts = LevelCounts::default();
    for record in records {
        counts.increment(&record.level);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(level: &str) -> LogRecord {
        LogRecord {
            date: "2024-01-22".to_string(),
            time: "08:30:01".to_string(),
            level: level.to_string(),
            message: "message".to_string(),
        }
    }

    #[test]
    fn test_counts_by_exact_level() {
        let records = vec![
            make_record("INFO"),
            make_record("ERROR"),
            make_record("INFO"),
        ];
        let counts = count_by_level(&records);
        assert_eq!(counts.get("INFO"), 2);
        assert_eq!(counts.get("ERROR"), 1);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_case_sensitive_keys() {
        let records = vec![make_record("INFO"), make_record("info")];
        let counts = count_by_level(&records);
        assert_eq!(counts.get("INFO"), 1);
        assert_eq!(counts.get("info"), 1);
    }

    #[test]
    fn test_count_conservation() {
        let records = vec![
            make_record("INFO"),
            make_record("WARN"),
            make_record("ERROR"),
            make_record("WARN"),
        ];
        let counts = count_by_level(&records);
        assert_eq!(counts.total() as usize, records.len());
    }

    #[test]
    fn test_empty_input_yields_empty_counts() {
        let counts = count_by_level(&[]);
        assert!(counts.is_empty());
    }
}
