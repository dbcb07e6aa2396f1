// src/batch.rs
//
// Headless fetch + render, one report or the whole catalog.

use std::path::PathBuf;

use crate::{
    catalog::Catalog,
    config::options::ExportOptions,
    fetch::{FetchError, ProxyMode, Transport, fetch_report_data},
    file,
    progress::Progress,
    table::{RenderedTable, TableSchema},
};

/// Fetch + render one report. `None` when there is nothing to show (no rows,
/// or no columns in row zero).
pub fn fetch_table(
    transport: &dyn Transport,
    proxy: &ProxyMode,
    url: &str,
    season: u16,
) -> Result<Option<RenderedTable>, FetchError> {
    let rows = fetch_report_data(transport, proxy, url, season)?;
    let schema = TableSchema::infer(&rows);
    if schema.is_empty() {
        return Ok(None);
    }
    Ok(Some(RenderedTable::render(&schema, &rows)))
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DumpSummary {
    pub written: Vec<PathBuf>,
    pub empty: usize,
    pub failed: usize,
}

/// Fetch every catalog report in order, one file each. A failing report is
/// reported through `progress` and skipped.
pub fn dump(
    catalog: &Catalog,
    transport: &dyn Transport,
    proxy: &ProxyMode,
    season: u16,
    export: &ExportOptions,
    progress: &mut dyn Progress,
) -> DumpSummary {
    let mut summary = DumpSummary::default();
    progress.begin(catalog.len());
    logf!("Dump: {} report(s) season={} → {}", catalog.len(), season, export.out_dir.display());

    for report in catalog.all() {
        progress.log(&format!("Fetching {}…", report.title));
        let table = match fetch_table(transport, proxy, &report.url, season) {
            Ok(Some(t)) => t,
            Ok(None) => {
                summary.empty += 1;
                progress.log(&format!("No data for {}", report.id));
                continue;
            }
            Err(e) => {
                summary.failed += 1;
                progress.item_failed(&report.id, &e.to_string());
                continue;
            }
        };

        match file::write_export(export, &report.id, season, &table) {
            Ok(path) => {
                summary.written.push(path);
                progress.item_done(&report.id);
            }
            Err(e) => {
                summary.failed += 1;
                progress.item_failed(&report.id, &e.to_string());
            }
        }
    }

    progress.finish();
    summary
}
