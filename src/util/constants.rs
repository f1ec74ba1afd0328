// logtally - util/constants.rs
//
// Single source of truth for all named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logtally";

/// Current application version (taken from Cargo.toml at compile time).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Log line format
// =============================================================================

/// Number of whitespace-delimited fields in a well-formed log line:
/// date, time, level, message.
pub const FIELD_COUNT: usize = 4;

// =============================================================================
// Table rendering
// =============================================================================

/// Fixed width of the level column in the statistics table.
///
/// Levels longer than this are not truncated; the row simply widens,
/// matching the behaviour of left-aligned padded formatting.
pub const LEVEL_COLUMN_WIDTH: usize = 16;

/// Header of the level column.
pub const LEVEL_HEADER: &str = "Level";

/// Header of the count column.
pub const COUNT_HEADER: &str = "Count";

// =============================================================================
// Logging defaults
// =============================================================================

/// Default tracing filter level when neither RUST_LOG nor --debug is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
