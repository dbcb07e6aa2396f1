// src/gui/components/data_table.rs
//
// Draws whatever the session's TableView says: spinner, error, prompt,
// "no data", or the stats grid. Purely a view.

use eframe::egui::{self, Align, Color32, Layout, RichText, Spinner, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    catalog::Report,
    gui::app::App,
    table::{ColumnRole, RenderedTable, TableView},
};

// text_highlight ≈ #2E7D32, text_name ≈ #1565C0
const HIGHLIGHT: Color32 = Color32::from_rgb(0x2E, 0x7D, 0x32);
const NAME: Color32 = Color32::from_rgb(0x15, 0x65, 0xC0);

const ROW_H: f32 = 22.0;
const HEADER_H: f32 = 26.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    match app.session.view() {
        TableView::Loading(report) => centered(ui, |ui| {
            ui.add(Spinner::new().size(32.0));
            ui.label(format!("Loading {} {}…", report.icon, report.title));
        }),
        TableView::Error(msg) => centered(ui, |ui| {
            let err = ui.visuals().error_fg_color;
            ui.heading("⚠️ Unable to load data");
            ui.label(RichText::new(msg).color(err));
            ui.label(RichText::new("Please check your internet connection and try again.").weak());
        }),
        TableView::NoReportSelected => centered(ui, |ui| {
            ui.heading("👆 Select a report");
            ui.label(RichText::new("Choose a statistics report above to view the data.").weak());
        }),
        TableView::Empty(report) => centered(ui, |ui| {
            ui.heading("📊 No data available");
            ui.label(format!(
                "Statistics for \"{}\" are not available for the {} season.",
                report.title,
                app.season()
            ));
        }),
        TableView::Populated { report, .. } => {
            let Some(table) = app.rendered.as_ref() else {
                return;
            };
            title_line(ui, report, table);
            ui.add_space(4.0);
            grid(ui, report, table);
        }
    }
}

fn centered(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui)) {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(ui.available_height() * 0.25);
        add(ui);
    });
}

fn title_line(ui: &mut egui::Ui, report: &Report, table: &RenderedTable) {
    ui.horizontal(|ui| {
        ui.heading(format!("{} {}", report.icon, report.title));
        ui.label(RichText::new(table.record_count_label()).weak());
    });
}

fn grid(ui: &mut egui::Ui, report: &Report, table: &RenderedTable) {
    let columns = table.schema.columns();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;           // reserve space instead of overlaying content
        s.bar_width = 10.0;
    }

    egui::ScrollArea::horizontal()
        .id_salt("stats_table_hscroll")
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                // fresh width state per report, columns differ
                .id_salt(("stats_table", &report.id));

            for c in columns {
                let w = f32::from(c.width);
                builder = builder.column(Column::initial(w).at_least(w.min(40.0)).resizable(true).clip(true));
            }

            builder
                .header(HEADER_H, |mut header| {
                    for c in columns {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let mut rt = RichText::new(&c.label).strong();
                            if c.highlight {
                                rt = rt.color(HIGHLIGHT);
                            }
                            ui.add(egui::Label::new(rt).selectable(false))
                                .on_hover_text(c.tooltip());
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, table.rows.len(), |mut row| {
                        let Some(data) = table.rows.get(row.index()) else {
                            return;
                        };
                        // podium rows stand out
                        row.set_selected(data.medal.is_some());

                        for (ci, c) in columns.iter().enumerate() {
                            let text = data.display_cell(&table.schema, ci);
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let mut rt = RichText::new(text);
                                if c.highlight {
                                    rt = rt.strong().color(HIGHLIGHT);
                                } else if c.role == ColumnRole::Name {
                                    rt = rt.color(NAME);
                                }
                                match c.role {
                                    ColumnRole::Name => {
                                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                                    }
                                    ColumnRole::Rank | ColumnRole::Stat => {
                                        ui.centered_and_justified(|ui| { ui.label(rt); });
                                    }
                                }
                            });
                        }
                    });
                });
        });
}
