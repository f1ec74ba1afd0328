// logtally - main.rs
//
// CLI entry point. Handles:
// 1. Argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Driving the core pipeline: load -> count -> filter -> render/export
// 4. Console output and the process exit code
//
// All user-facing printing happens here; the core only returns values
// and error kinds.

use clap::Parser;
use logtally::core::{export, filter, loader, render, stats, totals};
use logtally::util;
use logtally::util::error::TallyError;
use std::path::PathBuf;

/// logtally - log file analyser.
///
/// Reads a line-oriented log file in "DATE TIME LEVEL MESSAGE" format,
/// prints per-level statistics, and optionally lists the records at one
/// severity level.
#[derive(Parser, Debug)]
#[command(name = "logtally", version, about)]
struct Cli {
    /// Path to the log file to analyse.
    path: PathBuf,

    /// Severity level to filter by, case-insensitive (e.g. "error").
    level: Option<String>,

    /// Export the analysed records (filtered, when a level is given)
    /// to a .csv or .json file.
    #[arg(short = 'o', long = "export", value_name = "FILE")]
    export: Option<PathBuf>,

    /// Also print the total of decimal numbers embedded in the messages.
    #[arg(long = "totals")]
    totals: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::debug!(
        file = %cli.path.display(),
        level = cli.level.as_deref().unwrap_or("<none>"),
        "logtally starting"
    );

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Analysis failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), TallyError> {
    let records = loader::load_logs(&cli.path)?;

    // Empty result is a legitimate outcome, distinct from I/O failure:
    // report it and finish successfully.
    if records.is_empty() {
        println!(
            "WARNING: \"{}\" is empty or no line matches the expected log format",
            cli.path.display()
        );
        if cli.totals || cli.export.is_some() {
            println!("Nothing to total or export.");
        }
        return Ok(());
    }

    let counts = stats::count_by_level(&records);
    println!("{}", render::render_counts_table(&counts));

    // When a level is requested, everything downstream (listing, totals,
    // export) operates on the filtered subsequence.
    let selected = match &cli.level {
        Some(level) => {
            let filtered = filter::filter_by_level(&records, level);
            println!();
            if filtered.is_empty() {
                println!(
                    "INFO: no records of level \"{level}\" found in \"{}\"",
                    cli.path.display()
                );
            } else {
                for record in &filtered {
                    println!("{}", render::record_to_line(record));
                }
            }
            filtered
        }
        None => records,
    };

    if cli.totals {
        let total: f64 = selected
            .iter()
            .map(|record| totals::sum_decimals(&record.message))
            .sum();
        println!();
        // Fixed precision: the grammar only admits terminating decimals,
        // and raw f64 Display would leak accumulation noise like
        // 1351.4599999999998 into the report.
        println!("Total of decimal numbers in messages: {total:.2}");
    }

    if let Some(export_path) = &cli.export {
        let written = export::export_to_path(&selected, export_path)?;
        tracing::debug!(
            file = %export_path.display(),
            records = written,
            "Export complete"
        );
        println!();
        println!("Exported {written} records to \"{}\"", export_path.display());
    }

    Ok(())
}
