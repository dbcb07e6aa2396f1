// src/gui/actions/export.rs
use std::path::PathBuf;

use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // apply the text field before borrowing the table
    let typed = app.out_dir_text.trim();
    if !typed.is_empty() && PathBuf::from(typed) != app.state.options.export.out_dir {
        app.state.options.export.out_dir = PathBuf::from(typed);
        logf!("Export: Out dir set → {}", app.state.options.export.out_dir.display());
    }

    let season = app.season();
    let status_msg = match (app.rendered.as_ref(), app.session.view().report()) {
        (Some(table), Some(report)) => {
            logf!("Export: Begin {} season={} rows={}", report.id, season, table.rows.len());
            match file::write_export(&app.state.options.export, &report.id, season, table) {
                Ok(path) => {
                    logf!("Export: OK → {}", path.display());
                    format!("Exported {} to {}", table.record_count_label(), path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
        _ => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
    };

    // mutate app only after the table borrow is gone
    app.status(status_msg);
}
