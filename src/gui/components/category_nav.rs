// src/gui/components/category_nav.rs
//
// Category chips, then the reports of the active category.

use eframe::egui::{self, RichText};

use crate::{
    catalog::{Category, Report},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let catalog = app.catalog;
    let groups = catalog.all_by_category();
    let active_cat = app.state.gui.active_category;
    let active = app.state.gui.active_report.clone();

    let mut picked_cat: Option<Category> = None;
    let mut picked_report: Option<&Report> = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        for (&category, reports) in &groups {
            let text = format!("{} {} ({})", category.icon(), category.label(), reports.len());
            if ui.selectable_label(category == active_cat, text).clicked() && category != active_cat {
                picked_cat = Some(category);
            }
        }
    });

    ui.add_space(2.0);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        match groups.get(&active_cat) {
            Some(reports) => {
                for &report in reports {
                    let selected = active.as_deref() == Some(report.id.as_str());
                    if ui
                        .selectable_label(selected, format!("{} {}", report.icon, report.title))
                        .clicked()
                        && !selected
                    {
                        picked_report = Some(report);
                    }
                }
            }
            None => {
                ui.label(RichText::new("No reports in this category").weak());
            }
        }
    });

    if let Some(category) = picked_cat {
        actions::select_category(app, category);
    } else if let Some(report) = picked_report {
        logf!("UI: Category list → {}", report.id);
        actions::select_report(app, &report.id);
    }
}
