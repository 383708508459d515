// src/table/mod.rs
//! Generic sortable/filterable table.
//!
//! - `column`: declarative column specs (key, label, sort kind, compute/format).
//! - `sortable`: the stateful table (rows, sort state, visible order).
//! - `render`: the render-sink seam plus a collecting sink (`TableSnapshot`).
//!
//! Nothing in here knows about egui; the GUI draws a `TableSnapshot`.

pub mod column;
pub mod render;
pub mod sortable;

pub use column::{Align, ColumnSpec, SortDir, SortKind};
pub use render::{Cell, HeaderCell, RenderSink, TableSnapshot};
pub use sortable::{SortableTable, TableConfig};
