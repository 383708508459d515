// src/gui/components/search_bar.rs
use eframe::egui;

/// Search box plus "Clear". Returns `true` when `query` changed this frame,
/// by typing or by the button.
pub fn draw(ui: &mut egui::Ui, id_salt: &str, query: &mut String, placeholder: &str) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        let edit = egui::TextEdit::singleline(&mut *query)
            .id_salt(("search", id_salt))
            .hint_text(placeholder)
            .desired_width(260.0);
        changed |= ui.add(edit).changed();

        if ui.add_enabled(!query.is_empty(), egui::Button::new("Clear")).clicked() {
            query.clear();
            changed = true;
        }
    });
    changed
}
