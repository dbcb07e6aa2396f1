// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use cricket_stats::{config::state::GuiState, gui, logging};
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let img = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/cricket.png"
    )));
    match img {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (w, h) = rgba.dimensions();
            Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
        }
        Err(e) => {
            cricket_stats::logw!("Icon: decode failed: {}", e);
            None
        }
    }
}

fn main() {
    logging::init_file();

    let defaults = GuiState::default();
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([defaults.window_w as f32, defaults.window_h as f32])
        .with_min_inner_size([640.0, 400.0]);
    // eframe 0.32: icon set via viewport builder
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options) {
        cricket_stats::loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
