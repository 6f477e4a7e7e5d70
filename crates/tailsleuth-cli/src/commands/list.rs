//! `tailsleuth list`: the newest log files as a table, JSON, or CSV.
use crate::render::{self, OutputFormat};
use std::io::{self, Write};
use tailsleuth_core::{selector, Config, Error};

pub fn run(config: &Config, format: OutputFormat) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    super::ignore_broken_pipe(list_logs(config, format, &mut out, &mut io::stderr()))
}

/// Write the listing to `out`. An empty log root prints a notice to
/// `notice` and succeeds.
pub fn list_logs<W: Write, N: Write>(
    config: &Config,
    format: OutputFormat,
    out: &mut W,
    notice: &mut N,
) -> anyhow::Result<()> {
    let entries = selector::list_recent(&config.log_dir)?;
    if entries.is_empty() {
        writeln!(notice, "{}", Error::DirectoryEmpty(config.log_dir.clone()))?;
        return Ok(());
    }

    let rows = selector::listing_rows(&config.log_dir, &entries, config.max_files_listed);
    tracing::debug!("Listing {} of {} files", rows.len(), entries.len());
    render::write_rows(&rows, format, out)
}
