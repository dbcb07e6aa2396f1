// src/file.rs
//
// CSV/TSV output of a rendered table (clipboard text and files).
// Values are the formatted cells; ranks stay numeric.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::table::RenderedTable;

fn writer_for<W: std::io::Write>(out: W, format: ExportFormat) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(format.delim())
        .flexible(true)
        .from_writer(out)
}

/// Whole table as one string (Copy).
pub fn to_export_string(
    table: &RenderedTable,
    format: ExportFormat,
    include_headers: bool,
) -> Result<String, Box<dyn Error>> {
    let mut w = writer_for(Vec::new(), format);
    write_table(&mut w, table, include_headers)?;
    let bytes = w.into_inner().map_err(|e| e.to_string())?;
    Ok(String::from_utf8(bytes)?)
}

fn write_table<W: std::io::Write>(
    w: &mut csv::Writer<W>,
    table: &RenderedTable,
    include_headers: bool,
) -> Result<(), Box<dyn Error>> {
    if include_headers {
        w.write_record(table.headers())?;
    }
    for row in table.cell_rows() {
        w.write_record(row)?;
    }
    w.flush()?;
    Ok(())
}

/// Write `table` to `path`, creating parent directories.
pub fn write_table_to_path(
    path: &Path,
    table: &RenderedTable,
    format: ExportFormat,
    include_headers: bool,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut w = writer_for(fs::File::create(path)?, format);
    write_table(&mut w, table, include_headers)?;
    Ok(())
}

/// Export using the configured directory/format; returns the path written.
pub fn write_export(
    export: &ExportOptions,
    report_id: &str,
    season: u16,
    table: &RenderedTable,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path(report_id, season);
    write_table_to_path(&path, table, export.format, export.include_headers)?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
