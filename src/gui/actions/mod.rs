// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{select_report, copy, export, ...}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod select;  // src/gui/actions/select.rs

pub use copy::copy;
pub use export::export;
pub use select::{clear_selection, on_view_changed, refresh, select_category, select_report, set_proxy, set_season};
