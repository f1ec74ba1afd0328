// logtally - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation: every variant carries the path it
// relates to and, where applicable, the causal source error.
//
// Note what is deliberately NOT here: a malformed log line is not an error
// anywhere in the pipeline. The loader skips such lines silently (a policy
// choice inherited from the log format contract), and an empty record set
// or an empty filter result are legitimate outcomes the CLI layer reports
// on its own terms.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all logtally operations.
#[derive(Debug)]
pub enum TallyError {
    /// I/O error with path and operation context. Fatal for the whole
    /// load or export call that produced it; there is no partial result.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// CSV export failed.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON export failed.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Export path has no recognised extension (.csv or .json).
    UnsupportedExportFormat { path: PathBuf },
}

impl fmt::Display for TallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::Csv { path, source } => {
                write!(f, "CSV export to '{}' failed: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export to '{}' failed: {source}", path.display())
            }
            Self::UnsupportedExportFormat { path } => write!(
                f,
                "Unsupported export format for '{}' (expected .csv or .json)",
                path.display()
            ),
        }
    }
}

impl std::error::Error for TallyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::UnsupportedExportFormat { .. } => None,
        }
    }
}
