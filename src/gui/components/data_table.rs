// src/gui/components/data_table.rs
//
// egui side of the table render seam. Draws a `TableSnapshot`: header buttons
// for sortable columns, plain labels otherwise, cells aligned per column.
// Purely a view; the click is handed back to the caller, which owns the table.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::table::{Align as CellAlign, TableSnapshot};

const HEADER_H: f32 = 24.0;
const ROW_H: f32 = 20.0;

fn layout(align: CellAlign) -> Layout {
    match align {
        CellAlign::Left => Layout::left_to_right(Align::Center),
        CellAlign::Center => Layout::top_down(Align::Center),
        CellAlign::Right => Layout::right_to_left(Align::Center),
    }
}

/// Draw one table. Returns the key of a clicked sortable header, if any.
pub fn draw(ui: &mut egui::Ui, id_salt: &str, snap: &TableSnapshot) -> Option<String> {
    let mut clicked = None;

    if snap.nrows() == 0 {
        ui.label(RichText::new("No rows").italics().weak());
    }

    // The page scrolls as a whole; tables don't scroll on their own
    let table = TableBuilder::new(ui)
        .id_salt(("table", id_salt))
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(36.0).resizable(true).clip(true), snap.ncols());

    table
        .header(HEADER_H, |mut header| {
            for h in &snap.header {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.with_layout(layout(h.align), |ui| {
                        let text = RichText::new(h.text()).strong();
                        if h.sortable {
                            let button = egui::Button::new(text).frame(false);
                            if ui.add(button).on_hover_text("Sort").clicked() {
                                clicked = Some(h.key.clone());
                            }
                        } else {
                            ui.label(text);
                        }
                    });
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, snap.nrows(), |mut row| {
                let Some(cells) = snap.rows.get(row.index()) else { return };
                for cell in cells {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.with_layout(layout(cell.align), |ui| {
                            ui.label(&cell.text);
                        });
                    });
                }
            });
        });

    if let Some(key) = &clicked {
        logd!("UI: header click {id_salt}.{key}");
    }
    clicked
}
