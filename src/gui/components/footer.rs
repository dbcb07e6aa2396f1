// src/gui/components/footer.rs
use eframe::egui::{self, RichText};

use crate::config::consts::{CLUB_NAME, DATA_SOURCE_NAME, DATA_SOURCE_URL};

pub fn draw(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{} · Statistics powered by", CLUB_NAME)).small().weak());
        ui.hyperlink_to(RichText::new(DATA_SOURCE_NAME).small(), DATA_SOURCE_URL);
    });
}
