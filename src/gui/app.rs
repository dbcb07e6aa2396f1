// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    catalog::{self, Catalog},
    config::{
        consts::{CLUB_NAME, FIRST_SEASON},
        options::{available_seasons, current_season},
        state::AppState,
    },
    fetch::{FetchSession, HttpTransport, Transport},
    table::RenderedTable,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new()?);
    eframe::run_native(
        CLUB_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, AppState::default(), transport)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub catalog: &'static Catalog,

    /// Owns the current TableView; workers post results here
    pub session: FetchSession,

    /// Season picker entries, newest first
    pub seasons: Vec<u16>,

    /// Grid for the populated view, rebuilt when the view changes
    pub rendered: Option<RenderedTable>,

    // export dir text field (mapped to ExportOptions on export)
    pub out_dir_text: String,

    pub status: String,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState, transport: Arc<dyn Transport>) -> Self {
        let ctx = cc.egui_ctx.clone();
        let session = FetchSession::new(transport, state.options.fetch.proxy.clone())
            .with_notify(Arc::new(move || ctx.request_repaint()));

        let seasons = available_seasons(FIRST_SEASON, current_season());
        let out_dir_text = state.options.export.out_dir.to_string_lossy().into_owned();
        let catalog = catalog::global();

        logf!(
            "Init: reports={}, season={}, proxy={}",
            catalog.len(),
            state.options.fetch.season,
            state.options.fetch.proxy
        );

        let mut app = Self {
            state,
            catalog,
            session,
            seasons,
            rendered: None,
            out_dir_text,
            status: s!("Idle"),
        };

        // Start on the first primary report
        if let Some(first) = catalog.primary().first() {
            actions::select_report(&mut app, &first.id);
        }
        app
    }

    #[inline]
    pub fn season(&self) -> u16 {
        self.state.options.fetch.season
    }

    #[inline]
    pub fn active_report_id(&self) -> Option<&str> {
        self.state.gui.active_report.as_deref()
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.poll() {
            actions::on_view_changed(self);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            components::navigation::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            components::footer::draw(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::action_bar::draw(ui, self);
            ui.separator();
            components::data_table::draw(ui, self);
        });
    }
}
