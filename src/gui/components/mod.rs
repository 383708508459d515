// src/gui/components/mod.rs
use eframe::egui::Color32;

pub mod data_table;
pub mod error_panel;
pub mod kpis;
pub mod page_view;
pub mod search_bar;
pub mod section;
pub mod tabs;

/// Highlight for accent KPIs and badges.
pub const ACCENT: Color32 = Color32::from_rgb(0xFF, 0xA5, 0x00);
/// Error text.
pub const ERROR: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);
