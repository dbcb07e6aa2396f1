// src/gui/components/header.rs
//
// Club title plus the global controls: season, navigation mode, proxy.

use eframe::egui::{self, Align, Layout, RichText};

use crate::{
    config::{
        consts::{CLUB_NAME, LEAGUE_NAME},
        state::NavMode,
    },
    fetch::ProxyMode,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(RichText::new(format!("🏏 {}", CLUB_NAME)).strong());
            ui.label(RichText::new(format!("{} · Season Statistics", LEAGUE_NAME)).weak());
        });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button("⟳").on_hover_text("Reload the current report").clicked() {
                logf!("UI: Refresh clicked");
                actions::refresh(app);
            }

            proxy_combo(ui, app);
            ui.separator();
            nav_toggle(ui, app);
            ui.separator();
            season_combo(ui, app);
        });
    });
    ui.add_space(4.0);
}

fn season_combo(ui: &mut egui::Ui, app: &mut App) {
    let mut season = app.season();
    egui::ComboBox::from_id_salt("season_select")
        .selected_text(season.to_string())
        .show_ui(ui, |ui| {
            for &y in &app.seasons {
                ui.selectable_value(&mut season, y, y.to_string());
            }
        });
    ui.label("Season:");

    if season != app.season() {
        actions::set_season(app, season);
    }
}

fn nav_toggle(ui: &mut egui::Ui, app: &mut App) {
    let before = app.state.gui.nav;
    ui.selectable_value(&mut app.state.gui.nav, NavMode::Categories, "🗂 Categories");
    ui.selectable_value(&mut app.state.gui.nav, NavMode::Tabs, "📑 Tabs");
    if app.state.gui.nav != before {
        logf!("UI: Nav mode {:?} → {:?}", before, app.state.gui.nav);
    }
}

fn proxy_combo(ui: &mut egui::Ui, app: &mut App) {
    let current = app.session.proxy().clone();
    let mut picked = current.clone();
    egui::ComboBox::from_id_salt("proxy_select")
        .selected_text(current.name())
        .show_ui(ui, |ui| {
            for mode in [ProxyMode::Direct, ProxyMode::dev(), ProxyMode::relay()] {
                let label = mode.name();
                ui.selectable_value(&mut picked, mode, label);
            }
        });

    if picked != current {
        actions::set_proxy(app, picked);
    }
}
