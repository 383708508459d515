// src/gui/app.rs
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use eframe::egui;

use crate::config::consts::APP_TITLE;
use crate::config::options::PageKind;
use crate::config::state::AppState;
use crate::error::LoadError;
use crate::pages::{Page, PageView};
use crate::session::{self, Session};

use super::components;
use super::progress::{GuiProgress, read_status, set_status};
use super::router;

pub fn run(options: eframe::NativeOptions, state: AppState) -> eframe::Result<()> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )
}

/// What the central panel shows for the active tab.
pub enum PageState {
    Loading(Receiver<Result<Session, LoadError>>),
    Ready(PageView),
    Failed(String),
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // status line (loader threads write here)
    pub status: Arc<Mutex<String>>,

    pub page: PageState,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let status = Arc::new(Mutex::new(s!("Idle")));
        let page = start_load(page_at(state.gui.current_page_index), &state, &status);
        let app = Self { state, status, page };
        logf!("Init: page={:?} base={}", app.current_page_kind(), app.state.options.data_base_url);
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { page_at(self.current_index()) }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    /// Tab switch: every view is built fresh from a new load.
    pub fn switch_to(&mut self, idx: usize) {
        let prev = self.current_page_kind();
        self.state.gui.current_page_index = idx;
        logf!("UI: Tab switch {:?} → {:?}", prev, self.current_page_kind());
        self.reload();
    }

    /// Drop whatever the tab showed and load it again.
    pub fn reload(&mut self) {
        self.page = start_load(self.current_page(), &self.state, &self.status);
    }

    /// Pick up a finished load, if any.
    fn poll_load(&mut self) {
        let PageState::Loading(rx) = &self.page else { return };
        match rx.try_recv() {
            Ok(Ok(session)) => {
                let page = self.current_page();
                let view = page.build(&session);
                logf!("UI: {} ready, sections={}", page.label(), view.sections.len());
                self.page = PageState::Ready(view);
            }
            Ok(Err(e)) => {
                loge!("UI: {} failed: {e}", self.current_page().label());
                set_status(&self.status, "Load failed");
                self.page = PageState::Failed(e.to_string());
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                loge!("UI: loader thread vanished");
                self.page = PageState::Failed(s!("loader stopped unexpectedly"));
            }
        }
    }
}

/// Tab at `idx`; out of range falls back to the first one.
fn page_at(idx: usize) -> &'static dyn Page {
    let pages = router::all_pages();
    pages.get(idx).copied().unwrap_or(pages[0])
}

fn start_load(
    page: &'static dyn Page,
    state: &AppState,
    status: &Arc<Mutex<String>>,
) -> PageState {
    set_status(status, format!("Loading {}…", page.label()));
    let rx = session::spawn_load(page, state.options.clone(), GuiProgress::new(status.clone()));
    PageState::Loading(rx)
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            components::tabs::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", read_status(&self.status)));
        });

        egui::CentralPanel::default().show(ctx, |ui| match &mut self.page {
            PageState::Loading(_) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading…");
                });
            }
            PageState::Failed(msg) => components::error_panel::draw(ui, msg),
            PageState::Ready(view) => components::page_view::draw(ui, view),
        });

        // nothing else wakes the UI when a worker finishes
        if matches!(self.page, PageState::Loading(_)) {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
