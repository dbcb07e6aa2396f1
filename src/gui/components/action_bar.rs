// src/gui/components/action_bar.rs
//
// Export format, header toggle, output dir, Copy/Export, status line.

use eframe::egui::{self, Align, Layout, RichText};

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let has_table = app.rendered.is_some();

    ui.horizontal(|ui| {
        {
            let export = &mut app.state.options.export;
            let before = export.format;
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            if export.format != before {
                logf!("UI: Export format → {:?}", export.format);
            }

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        }

        ui.separator();
        ui.label("Output dir:");
        ui.add(egui::TextEdit::singleline(&mut app.out_dir_text).desired_width(160.0));

        ui.separator();
        let ctx = ui.ctx().clone();
        if ui.add_enabled(has_table, egui::Button::new("📋 Copy")).clicked() {
            actions::copy(app, &ctx);
        }
        if ui.add_enabled(has_table, egui::Button::new("💾 Export")).clicked() {
            actions::export(app);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if app.active_report_id().is_some() && ui.small_button("✖").on_hover_text("Clear selection").clicked() {
                actions::clear_selection(app);
            }
            ui.label(RichText::new(&app.status).weak());
        });
    });
}
