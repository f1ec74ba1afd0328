// logtally - core/export.rs
//
// CSV and JSON export of a record set.
// Core layer: writes to any Write trait object; path parameters exist
// only to give errors their context.

use crate::core::model::LogRecord;
use crate::util::error::TallyError;
use std::io::Write;
use std::path::Path;

/// Export records to CSV with a `date,time,level,message` header row.
///
/// Returns the number of records written.
pub fn export_csv<W: Write>(
    records: &[LogRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, TallyError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["date", "time", "level", "message"])
        .map_err(|e| TallyError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    for record in records {
        csv_writer
            .write_record([&record.date, &record.time, &record.level, &record.message])
            .map_err(|e| TallyError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
    }

    csv_writer.flush().map_err(|e| TallyError::Io {
        path: export_path.to_path_buf(),
        operation: "flush",
        source: e,
    })?;

    Ok(records.len())
}

/// Export records to JSON (pretty-printed array of objects).
pub fn export_json<W: Write>(
    records: &[LogRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, TallyError> {
    serde_json::to_writer_pretty(writer, records).map_err(|e| TallyError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(records.len())
}

/// Export records to the file at `path`, choosing the format from the
/// file extension (`.csv` or `.json`).
pub fn export_to_path(records: &[LogRecord], path: &Path) -> Result<usize, TallyError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    let writer = move || -> Result<std::fs::File, TallyError> {
        std::fs::File::create(path).map_err(|e| TallyError::Io {
            path: path.to_path_buf(),
            operation: "create",
            source: e,
        })
    };

    match extension.as_deref() {
        Some("csv") => export_csv(records, writer()?, path),
        Some("json") => export_json(records, writer()?, path),
        _ => Err(TallyError::UnsupportedExportFormat {
            path: path.to_path_buf(),
        }),
    }
}
