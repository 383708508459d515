// src/lib.rs
//! Capita Score dashboards.
//!
//! CSV exports are fetched over HTTP (`core::net`), decoded (`csv`) into
//! `RowRecord`s and shown through generic sortable tables (`table`). Each
//! dashboard page (`pages`) picks its sources, columns and KPIs; `gui` draws
//! the result with egui.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod gui;
pub mod kpi;
pub mod pages;
pub mod progress;
pub mod record;
pub mod session;
pub mod table;
