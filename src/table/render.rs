// src/table/render.rs
//
// The render seam. A table walks its header and visible rows and hands them to a
// `RenderSink`; what the sink does with them (collect, paint, print) is its own
// business. Sort/filter logic stays testable without any UI toolkit.

use super::column::{Align, SortDir};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub align: Align,
    /// Set on the active sort column only.
    pub sorted: Option<SortDir>,
}

impl HeaderCell {
    /// Label with the ▲/▼ indicator when this is the active sort column.
    pub fn text(&self) -> String {
        match self.sorted {
            Some(dir) => format!("{} {}", self.label, dir.hint()),
            None => self.label.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub align: Align,
}

pub trait RenderSink {
    fn header(&mut self, cells: Vec<HeaderCell>);
    fn row(&mut self, cells: Vec<Cell>);
}

/// Collecting sink: the row-of-cells picture of a table at one moment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSnapshot {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<Vec<Cell>>,
}

impl RenderSink for TableSnapshot {
    fn header(&mut self, cells: Vec<HeaderCell>) {
        self.header = cells;
        self.rows.clear();
    }

    fn row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }
}

impl TableSnapshot {
    pub fn ncols(&self) -> usize {
        self.header.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Rendered texts of one column, top to bottom.
    pub fn column(&self, key: &str) -> Vec<&str> {
        let Some(ci) = self.header.iter().position(|h| h.key == key) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter_map(|r| r.get(ci).map(|c| c.text.as_str()))
            .collect()
    }

    /// The header cell carrying the sort indicator, if any.
    pub fn sorted_header(&self) -> Option<&HeaderCell> {
        self.header.iter().find(|h| h.sorted.is_some())
    }

    /// All rendered texts joined by spaces; what a page-level search looks at.
    pub fn text_content(&self) -> String {
        let mut parts: Vec<&str> = self.header.iter().map(|h| h.label.as_str()).collect();
        for row in &self.rows {
            parts.extend(row.iter().map(|c| c.text.as_str()));
        }
        parts.join(" ")
    }
}
