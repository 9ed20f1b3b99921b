// crates/cli/src/presentation.rs
use crate::error::{AppError, Result};
use line_tally_engine::options::OutputFormat;
use line_tally_engine::table::{FrequencyTable, TallyEntry};
use std::io::Write;

/// Write the frequency table to `out`, most frequent first.
///
/// Every entry is written; the empty key renders as `" <count>"` in plain format.
///
/// # Errors
///
/// Returns [`AppError::Output`] if writing fails and [`AppError::Json`] if
/// JSON serialization fails.
pub fn write_table<W: Write>(out: &mut W, table: &FrequencyTable, format: OutputFormat) -> Result<()> {
    let entries = table.most_common();

    match format {
        OutputFormat::Plain => write_sv(out, &entries, " ")?,
        OutputFormat::Tsv => write_sv(out, &entries, "\t")?,
        OutputFormat::Json => write_json(out, &entries)?,
    }

    out.flush().map_err(AppError::Output)
}

fn write_sv<W: Write>(out: &mut W, entries: &[TallyEntry], sep: &str) -> Result<()> {
    for e in entries {
        writeln!(out, "{}{sep}{}", e.key, e.count).map_err(AppError::Output)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, entries: &[TallyEntry]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out).map_err(AppError::Output)
}
