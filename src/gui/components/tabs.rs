// src/gui/components/tabs.rs
//
// Top navigation. Clicking another tab starts a fresh load for it; clicking the
// active tab reloads it.

use eframe::egui;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        ui.strong(crate::config::consts::APP_TITLE);
        ui.separator();

        let cur = app.current_index();
        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, page.label()).clicked() {
                if selected {
                    logf!("UI: Reload {:?}", page.kind());
                    app.reload();
                } else {
                    app.switch_to(idx);
                }
            }
        }
    });
}
