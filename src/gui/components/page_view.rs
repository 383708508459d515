// src/gui/components/page_view.rs
use eframe::egui::{self, RichText};

use crate::pages::PageView;

use super::{kpis, search_bar, section};

/// Title, KPI strip, page-wide search (if any), then every visible section.
pub fn draw(ui: &mut egui::Ui, view: &mut PageView) {
    ui.heading(&view.title);
    ui.add_space(6.0);
    kpis::draw(ui, &view.kpis);
    ui.add_space(6.0);

    if let Some(search) = &view.search {
        let mut query = search.query.clone();
        let placeholder = search.placeholder.clone();
        if search_bar::draw(ui, "page", &mut query, &placeholder) {
            view.set_search_query(&query);
        }
        ui.add_space(6.0);
    }

    egui::ScrollArea::vertical()
        .id_salt("page_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if view.sections.is_empty() {
                ui.label(RichText::new("No data").italics().weak());
            }
            for ix in 0..view.sections.len() {
                if !view.is_section_visible(ix) {
                    continue;
                }
                section::draw(ui, &mut view.sections[ix]);
                ui.add_space(8.0);
            }
        });
}
