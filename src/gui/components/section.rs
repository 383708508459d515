// src/gui/components/section.rs
//
// One card: title, subtitle, badges, optional search row, then the table.
// Collapsible cards (match history) keep title and badges in the header line so
// a closed card still reads as a summary.

use eframe::egui::{self, RichText};
use eframe::egui::collapsing_header::CollapsingState;

use crate::pages::{Badge, Section};

use super::{ACCENT, data_table, search_bar};

pub fn draw(ui: &mut egui::Ui, section: &mut Section) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        if section.collapsible {
            let id = ui.make_persistent_id(("section", &section.id));
            let state = CollapsingState::load_with_default_open(ui.ctx(), id, section.open);
            section.open = state.is_open();
            state
                .show_header(ui, |ui| header_line(ui, &section.title, &section.badges))
                .body(|ui| body(ui, section));
        } else {
            header_line(ui, &section.title, &section.badges);
            if let Some(sub) = &section.subtitle {
                ui.label(RichText::new(sub).small().weak());
            }
            ui.add_space(4.0);
            body(ui, section);
        }
    });
}

fn header_line(ui: &mut egui::Ui, title: &str, badges: &[Badge]) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(title).strong().size(16.0));
        for b in badges {
            badge(ui, b);
        }
    });
}

fn badge(ui: &mut egui::Ui, b: &Badge) {
    let mut text = RichText::new(format!(" {} {} ", b.label, b.value))
        .small()
        .background_color(ui.visuals().faint_bg_color);
    if b.accent {
        text = text.color(ACCENT);
    }
    ui.label(text);
}

fn body(ui: &mut egui::Ui, section: &mut Section) {
    if let Some(search) = &section.search {
        let mut query = search.query.clone();
        let placeholder = search.placeholder.clone();
        if search_bar::draw(ui, &section.id, &mut query, &placeholder) {
            section.set_query(&query);
        }
        ui.add_space(4.0);
    }

    let snap = section.table.snapshot();
    if let Some(key) = data_table::draw(ui, &section.id, &snap) {
        section.sort_by_header(&key);
    }
}
