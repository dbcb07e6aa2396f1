// src/gui/actions/select.rs
//
// Everything that starts a fetch goes through here so the session and the
// GUI state agree on which report is active.

use crate::{
    catalog::Category,
    fetch::ProxyMode,
    gui::app::App,
    table::{TableView, record_count_label},
};

pub fn select_report(app: &mut App, id: &str) {
    let catalog = app.catalog;
    let Some(report) = catalog.get(id) else {
        logw!("UI: Unknown report id {}", id);
        return;
    };

    logf!("UI: Select {} season={}", report.id, app.season());
    app.state.gui.active_report = Some(report.id.clone());
    app.state.gui.active_category = report.category;
    app.rendered = None;

    let season = app.season();
    app.session.select(report, season);
    app.status(format!("Loading {}…", report.title));
}

/// Chip click: switch category and open its first report.
pub fn select_category(app: &mut App, category: Category) {
    logf!("UI: Category → {}", category);
    app.state.gui.active_category = category;

    let catalog = app.catalog;
    let already_inside = app
        .active_report_id()
        .and_then(|id| catalog.get(id))
        .is_some_and(|r| r.category == category);
    if already_inside {
        return;
    }
    if let Some(first) = catalog.in_category(category).first() {
        select_report(app, &first.id);
    }
}

pub fn set_season(app: &mut App, season: u16) {
    if season == app.season() {
        return;
    }
    logf!("UI: Season {} → {}", app.season(), season);
    app.state.options.fetch.season = season;
    refresh(app);
}

pub fn set_proxy(app: &mut App, proxy: ProxyMode) {
    if &proxy == app.session.proxy() {
        return;
    }
    logf!("UI: Proxy → {}", proxy);
    app.state.options.fetch.proxy = proxy.clone();
    app.session.set_proxy(proxy);
    refresh(app);
}

/// Re-fetch the active report (season/proxy change, retry).
pub fn refresh(app: &mut App) {
    if let Some(id) = app.state.gui.active_report.clone() {
        select_report(app, &id);
    }
}

pub fn clear_selection(app: &mut App) {
    logf!("UI: Clear selection");
    app.state.gui.active_report = None;
    app.rendered = None;
    app.session.clear();
    app.status("Idle");
}

/// After `FetchSession::poll` applied a result.
pub fn on_view_changed(app: &mut App) {
    app.rendered = app.session.view().rendered();

    let msg = match app.session.view() {
        TableView::Populated { report, rows, .. } => {
            format!("{}: {}", report.title, record_count_label(rows.len()))
        }
        TableView::Empty(report) => format!("{}: no data for {}", report.title, app.season()),
        TableView::Error(e) => format!("Error: {}", e),
        TableView::Loading(report) => format!("Loading {}…", report.title),
        TableView::NoReportSelected => s!("Idle"),
    };
    app.status(msg);
}
