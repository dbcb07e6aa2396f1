// src/gui/components/navigation.rs
use eframe::egui;

use crate::{config::state::NavMode, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(2.0);
    match app.state.gui.nav {
        NavMode::Tabs => super::tabs::draw(ui, app),
        NavMode::Categories => super::category_nav::draw(ui, app),
    }
    ui.add_space(2.0);
}
