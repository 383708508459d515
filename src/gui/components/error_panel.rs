// src/gui/components/error_panel.rs
use eframe::egui::{self, RichText};

use super::ERROR;

/// Shown in place of the page when its load failed.
pub fn draw(ui: &mut egui::Ui, msg: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new(format!("Failed to load data: {msg}")).color(ERROR));
        ui.label(RichText::new("Switch tabs or click the active tab to retry.").small());
    });
}
