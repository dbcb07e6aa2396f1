// src/table/mod.rs
//! Column inference and rendering for report tables.
//!
//! Upstream reports are untyped: each row is a JSON object whose keys vary
//! by report. The first row defines the schema ([`TableSchema::infer`]);
//! every other row is read through that schema, so the renderer never
//! re-inspects row shapes.
//!
//! ```text
//! rows ─▶ columns::discover ─▶ order::reorder ─▶ TableSchema
//!                                                   │
//! rows ────────────────────────────────────────────▶ view::RenderedTable
//! ```

pub mod columns;
pub mod format;
pub mod order;
pub mod view;

pub use columns::{ColumnConfig, ColumnRole, TableSchema};
pub use format::{format_value, medal, rank_for_row};
pub use view::{RenderedRow, RenderedTable, TableView, record_count_label};

/// One record of a report's result set. Key order is the payload's order.
pub type StatsRow = serde_json::Map<String, serde_json::Value>;
