// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::DashboardOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: DashboardOptions,
    pub gui: GuiState,
}
