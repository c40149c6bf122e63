//! CSV serialisation of an [`ExportTable`].
//!
//! The result table is two blocks separated by an empty line: the
//! `Parameter,Wert` summary followed by the per-cell rows. The threshold
//! sensitivity table is written to its own file.
use super::table::{ExportTable, CELL_HEADER, SUMMARY_HEADER, THRESHOLD_HEADER};
use crate::io::ensure_parent_dir;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the summary and per-cell blocks to `out`.
pub fn write_table<W: Write>(table: &ExportTable, mut out: W) -> Result<(), String> {
    {
        let mut wtr = csv::Writer::from_writer(&mut out);
        wtr.write_record(SUMMARY_HEADER).map_err(csv_err)?;
        for row in &table.summary {
            wtr.write_record([row.parameter, row.value.as_str()])
                .map_err(csv_err)?;
        }
        wtr.flush().map_err(|e| format!("Failed to flush CSV: {e}"))?;
    }
    out.write_all(b"\n")
        .map_err(|e| format!("Failed to write CSV: {e}"))?;
    {
        let mut wtr = csv::Writer::from_writer(&mut out);
        wtr.write_record(CELL_HEADER).map_err(csv_err)?;
        for row in &table.cells {
            wtr.write_record(row.fields()).map_err(csv_err)?;
        }
        wtr.flush().map_err(|e| format!("Failed to flush CSV: {e}"))?;
    }
    Ok(())
}

/// Write the threshold sensitivity rows to `out`.
pub fn write_thresholds<W: Write>(table: &ExportTable, out: W) -> Result<(), String> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(THRESHOLD_HEADER).map_err(csv_err)?;
    for row in &table.thresholds {
        wtr.write_record(row.fields()).map_err(csv_err)?;
    }
    wtr.flush().map_err(|e| format!("Failed to flush CSV: {e}"))
}

/// [`write_table`] into a file, creating parent directories.
pub fn write_table_file(table: &ExportTable, path: &Path) -> Result<(), String> {
    let file = create(path)?;
    write_table(table, BufWriter::new(file))
        .map_err(|e| format!("{e} ({})", path.display()))
}

/// [`write_thresholds`] into a file, creating parent directories.
pub fn write_thresholds_file(table: &ExportTable, path: &Path) -> Result<(), String> {
    let file = create(path)?;
    write_thresholds(table, BufWriter::new(file))
        .map_err(|e| format!("{e} ({})", path.display()))
}

fn create(path: &Path) -> Result<File, String> {
    ensure_parent_dir(path)?;
    File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))
}

fn csv_err(e: csv::Error) -> String {
    format!("Failed to write CSV record: {e}")
}
