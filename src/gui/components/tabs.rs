// src/gui/components/tabs.rs
//
// Primary reports as tabs; the rest live in a "More" menu grouped by
// category. Clicking either starts a fetch via actions::select_report.

use eframe::egui::{self, RichText};

use crate::{
    catalog::Report,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let catalog = app.catalog;
    let active = app.state.gui.active_report.clone();
    let mut clicked: Option<&Report> = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for report in catalog.primary() {
            let selected = active.as_deref() == Some(report.id.as_str());
            if ui
                .selectable_label(selected, format!("{} {}", report.icon, report.title))
                .clicked()
                && !selected
            {
                clicked = Some(report);
            }
        }

        let groups = catalog.secondary_by_category();
        if groups.is_empty() {
            return;
        }

        let more_active = active
            .as_deref()
            .is_some_and(|id| catalog.secondary().iter().any(|r| r.id == id));
        let more_label = if more_active {
            RichText::new("More ▾").strong()
        } else {
            RichText::new("More ▾")
        };

        ui.menu_button(more_label, |ui| {
            for (category, reports) in &groups {
                ui.label(RichText::new(format!("{} {}", category.icon(), category.label())).strong());
                for &report in reports {
                    let selected = active.as_deref() == Some(report.id.as_str());
                    if ui
                        .selectable_label(selected, format!("  {} {}", report.icon, report.title))
                        .clicked()
                    {
                        clicked = Some(report);
                        ui.close();
                    }
                }
                ui.separator();
            }
        });
    });

    if let Some(report) = clicked {
        logf!("UI: Tab → {}", report.id);
        actions::select_report(app, &report.id);
    }
}
