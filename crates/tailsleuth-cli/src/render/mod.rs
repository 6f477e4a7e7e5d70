//! Listing output: a boxed table for people, JSON or CSV for scripts.
pub mod table;

pub use table::{Align, Table};

use clap::ValueEnum;
use std::io::Write;
use tailsleuth_core::selector::ListingRow;

/// `ctime`-style timestamp, e.g. `Mon Oct 14 09:05:03 2026`.
pub const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table with Time, Directory, and File columns
    Table,
    /// JSON array of row objects
    Json,
    /// CSV with a header row
    Csv,
}

/// Write `rows` to `out` in the requested format.
pub fn write_rows<W: Write>(
    rows: &[ListingRow],
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            write!(out, "{}", listing_table(rows))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Build the `Time | Directory | File` table.
pub fn listing_table(rows: &[ListingRow]) -> Table {
    let mut table = Table::new(["Time", "Directory", "File"]);
    table.align(1, Align::Left);
    table.align(2, Align::Left);
    for row in rows {
        table.add_row([
            row.timestamp.format(CTIME_FORMAT).to_string(),
            row.directory.to_string(),
            row.filename.to_string(),
        ]);
    }
    table
}
