// src/table/view.rs
//
// What the table area shows, and the display-ready grid for the populated
// case. The GUI draws `TableView`; copy/export reuse `RenderedTable`.

use crate::catalog::Report;
use crate::fetch::FetchError;

use super::columns::{ColumnRole, TableSchema};
use super::format::{format_value, medal, rank_for_row};
use super::StatsRow;

/// Table-area state, driven by the fetch lifecycle:
///
/// ```text
/// NoReportSelected ──select──▶ Loading ──rows──▶ Populated | Empty
///        ▲                        │
///        └──────clear─────────────┴──failure──▶ Error
/// ```
#[derive(Clone, Debug, Default)]
pub enum TableView {
    Loading(Report),
    Error(String),
    #[default]
    NoReportSelected,
    Empty(Report),
    Populated {
        report: Report,
        rows: Vec<StatsRow>,
        schema: TableSchema,
    },
}

impl TableView {
    pub fn loading(report: &Report) -> Self {
        TableView::Loading(report.clone())
    }

    /// Outcome of a finished fetch. Row data is replaced wholesale.
    pub fn resolved(report: Report, result: Result<Vec<StatsRow>, FetchError>) -> Self {
        match result {
            Ok(rows) => {
                let schema = TableSchema::infer(&rows);
                // no columns (no rows, or row zero not an object): nothing to show
                if schema.is_empty() {
                    return TableView::Empty(report);
                }
                TableView::Populated { report, rows, schema }
            }
            Err(e) => TableView::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, TableView::Loading(_))
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            TableView::Loading(r) | TableView::Empty(r) => Some(r),
            TableView::Populated { report, .. } => Some(report),
            TableView::Error(_) | TableView::NoReportSelected => None,
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            TableView::Populated { rows, .. } => rows.len(),
            _ => 0,
        }
    }

    /// Grid for the populated state; `None` otherwise.
    pub fn rendered(&self) -> Option<RenderedTable> {
        match self {
            TableView::Populated { rows, schema, .. } => Some(RenderedTable::render(schema, rows)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedRow {
    /// `None` when the row carries a numeric `no` that is not a rank.
    pub rank: Option<u64>,
    /// Medal for ranks 1–3. Cosmetic: rows keep the server's order.
    pub medal: Option<&'static str>,
    /// Formatted cells, one per schema column, in schema order.
    pub cells: Vec<String>,
}

impl RenderedRow {
    /// Cell text for on-screen display: the rank column shows the medal
    /// when there is one.
    pub fn display_cell<'a>(&'a self, schema: &TableSchema, col: usize) -> &'a str {
        let is_rank = schema
            .columns()
            .get(col)
            .is_some_and(|c| c.role == ColumnRole::Rank);
        match (is_rank, self.medal) {
            (true, Some(m)) => m,
            _ => self.cells.get(col).map(String::as_str).unwrap_or(""),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedTable {
    pub schema: TableSchema,
    pub rows: Vec<RenderedRow>,
}

impl RenderedTable {
    pub fn render(schema: &TableSchema, rows: &[StatsRow]) -> Self {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let rank = rank_for_row(row, i);
                let cells = schema
                    .columns()
                    .iter()
                    .map(|c| format_value(row.get(&c.key), &c.key))
                    .collect();
                RenderedRow { rank, medal: rank.and_then(medal), cells }
            })
            .collect();
        Self { schema: schema.clone(), rows }
    }

    pub fn headers(&self) -> Vec<String> {
        self.schema.labels()
    }

    /// Plain cells (ranks as numbers), for copy/export.
    pub fn cell_rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|r| r.cells.as_slice())
    }

    pub fn record_count_label(&self) -> String {
        record_count_label(self.rows.len())
    }
}

pub fn record_count_label(n: usize) -> String {
    if n == 1 { s!("1 record") } else { format!("{} records", n) }
}
