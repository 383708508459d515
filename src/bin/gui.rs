// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use capita_score::config::consts::{WINDOW_H, WINDOW_W};
use capita_score::config::state::AppState;
use capita_score::{gui, logging};
use color_eyre::eyre::eyre;
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let bytes = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/capita.png"));
    let rgba = image::load_from_memory(bytes).ok()?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width, height })
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // The dashboard works without a log file; say so and carry on
    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {e}");
    }

    let state = AppState::default();
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32])
        .with_min_inner_size([WINDOW_W as f32 / 2.0, WINDOW_H as f32 / 2.0]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions { viewport, ..Default::default() };
    gui::run(options, state).map_err(|e| eyre!("GUI failed: {e}"))
}
