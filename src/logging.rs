// src/logging.rs
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use log::LevelFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Route the `log` facade to `.store/debug.log` (everything from this crate at
/// debug and up) and to stderr (warnings and errors only).
///
/// Dependencies are capped at `warn`; egui/winit/reqwest are chatty at debug.
pub fn init() -> Result<(), fern::InitError> {
    start();
    fs::create_dir_all(STORE_DIR)?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            out.finish(format_args!("[{elapsed}][{}] {message}", record.level()))
        })
        .level(LevelFilter::Warn)
        .level_for(env!("CARGO_CRATE_NAME"), LevelFilter::Debug)
        .chain(fern::log_file(Path::new(LOG_FILE))?)
        .chain(
            fern::Dispatch::new()
                .level(LevelFilter::Warn)
                .chain(std::io::stderr()),
        )
        .apply()?;

    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}
