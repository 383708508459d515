// src/gui/components/kpis.rs
use eframe::egui::{self, RichText};

use crate::kpi::Kpi;

use super::ACCENT;

/// One boxed figure per KPI, wrapping onto new lines on narrow windows.
pub fn draw(ui: &mut egui::Ui, kpis: &[Kpi]) {
    if kpis.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for kpi in kpis {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(160.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&kpi.label).small());
                    let mut value = RichText::new(&kpi.value).heading().strong();
                    if kpi.accent {
                        value = value.color(ACCENT);
                    }
                    ui.label(value);
                });
            });
        }
    });
}
