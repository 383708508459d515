// src/table/sortable.rs
//! SortableTable: rows + column specs + sort state, rendered through a sink.
//!
//! Purpose:
//! - Own the backing rows and the active sort (key + direction).
//! - Keep a *visible order*: indices into the rows, sorted, optionally filtered.
//!   Rows themselves are never reordered or mutated.
//! - Render the visible order into any `RenderSink`.
//!
//! The text filter is not state. Every operation that re-renders without a query
//! (`replace_rows`, `activate_header`, an empty `filter_by_text`) shows the full
//! sorted row set; a caller that wants the filter to survive reissues it.

use std::cmp::Ordering;

use crate::core::number::to_number;
use crate::core::sanitize::normalize_text;
use crate::error::TableError;
use crate::record::RowRecord;

use super::column::{ColumnSpec, SortDir, SortKind};
use super::render::{Cell, HeaderCell, RenderSink, TableSnapshot};

/// Everything a table is built from.
#[derive(Clone, Debug)]
pub struct TableConfig {
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<RowRecord>,
    /// Defaults to the first sortable column.
    pub initial_sort_key: Option<String>,
    pub initial_sort_dir: SortDir,
}

impl TableConfig {
    pub fn new(columns: Vec<ColumnSpec>, rows: Vec<RowRecord>) -> Self {
        Self {
            columns,
            rows,
            initial_sort_key: None,
            initial_sort_dir: SortDir::Descending,
        }
    }

    pub fn sort_by(mut self, key: &str, dir: SortDir) -> Self {
        self.initial_sort_key = Some(s!(key));
        self.initial_sort_dir = dir;
        self
    }
}

#[derive(Clone, Debug)]
pub struct SortableTable {
    columns: Vec<ColumnSpec>,
    rows: Vec<RowRecord>,
    /// Index into `columns`
    sort_col: Option<usize>,
    sort_dir: SortDir,
    /// Positions of shown rows in `rows`, in display order
    visible: Vec<usize>,
}

/// Per-row sort key, derived once per render.
#[derive(Clone, Debug)]
enum SortValue {
    Num(f64),
    Text(String),
}

impl SortableTable {
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        let TableConfig { columns, rows, initial_sort_key, initial_sort_dir } = config;
        validate_columns(&columns)?;

        let sort_col = match initial_sort_key {
            Some(key) => {
                let ci = columns
                    .iter()
                    .position(|c| c.key == key)
                    .ok_or_else(|| TableError::UnknownSortKey(key.clone()))?;
                if !columns[ci].sortable {
                    return Err(TableError::UnsortableSortKey(key));
                }
                Some(ci)
            }
            None => columns.iter().position(|c| c.sortable),
        };

        let mut table = Self {
            columns,
            rows,
            sort_col,
            sort_dir: initial_sort_dir,
            visible: Vec::new(),
        };
        table.rerender(None);
        Ok(table)
    }

    /* ---------- operations ---------- */

    /// Swap in a new row set; current sort applies, any filter is dropped.
    pub fn replace_rows(&mut self, rows: Vec<RowRecord>) {
        self.rows = rows;
        self.rerender(None);
    }

    /// Show only rows whose values at `search_keys` (all column keys when `None`
    /// or empty) contain `query`, ignoring case and diacritics.
    /// An empty query shows every row.
    pub fn filter_by_text(&mut self, query: &str, search_keys: Option<&[&str]>) {
        let q = normalize_text(query);
        if q.is_empty() {
            self.rerender(None);
            return;
        }

        let keys: Vec<&str> = match search_keys {
            Some(keys) if !keys.is_empty() => keys.to_vec(),
            _ => self.columns.iter().map(|c| c.key.as_str()).collect(),
        };

        let kept: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                let hay = keys
                    .iter()
                    .map(|k| normalize_text(row.value(k)))
                    .collect::<Vec<_>>()
                    .join(" ");
                hay.contains(&q)
            })
            .map(|(i, _)| i)
            .collect();

        self.rerender(Some(kept));
    }

    /// Header click. Same column flips direction; another sortable column becomes
    /// active with its default direction. Returns `false` (and changes nothing)
    /// for unknown or unsortable keys.
    pub fn activate_header(&mut self, key: &str) -> bool {
        let Some(ci) = self.columns.iter().position(|c| c.key == key) else {
            return false;
        };
        if !self.columns[ci].sortable {
            return false;
        }

        if self.sort_col == Some(ci) {
            self.sort_dir = self.sort_dir.flipped();
        } else {
            self.sort_col = Some(ci);
            self.sort_dir = self.columns[ci].default_dir.unwrap_or_default();
        }
        logd!("Table: sort by {key} {:?}", self.sort_dir);
        self.rerender(None);
        true
    }

    /* ---------- read access ---------- */

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Backing rows in their original order.
    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn sort_key(&self) -> Option<&str> {
        self.sort_col.map(|ci| self.columns[ci].key.as_str())
    }

    pub fn sort_dir(&self) -> SortDir {
        self.sort_dir
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Rows as currently shown (sorted, filtered).
    pub fn visible_rows(&self) -> impl Iterator<Item = &RowRecord> {
        self.visible.iter().map(|&ix| &self.rows[ix])
    }

    /* ---------- rendering ---------- */

    pub fn render(&self, sink: &mut dyn RenderSink) {
        let header = self
            .columns
            .iter()
            .enumerate()
            .map(|(ci, col)| HeaderCell {
                key: col.key.clone(),
                label: col.label.clone(),
                sortable: col.sortable,
                align: col.align,
                sorted: (self.sort_col == Some(ci)).then_some(self.sort_dir),
            })
            .collect();
        sink.header(header);

        for row in self.visible_rows() {
            let cells = self
                .columns
                .iter()
                .map(|col| Cell { text: col.display(row), align: col.align })
                .collect();
            sink.row(cells);
        }
    }

    pub fn snapshot(&self) -> TableSnapshot {
        let mut snap = TableSnapshot::default();
        self.render(&mut snap);
        snap
    }

    /* ---------- internals ---------- */

    /// Recompute the visible order from `subset` (or all rows), sorted.
    fn rerender(&mut self, subset: Option<Vec<usize>>) {
        let mut order = subset.unwrap_or_else(|| (0..self.rows.len()).collect());

        if let Some(ci) = self.sort_col {
            let col = &self.columns[ci];
            let keys: Vec<SortValue> = self.rows.iter().map(|r| sort_value(col, r)).collect();
            let dir = self.sort_dir;
            order.sort_by(|&a, &b| compare(&keys[a], &keys[b], dir));
        }

        self.visible = order;
    }
}

fn validate_columns(columns: &[ColumnSpec]) -> Result<(), TableError> {
    if columns.is_empty() {
        return Err(TableError::NoColumns);
    }
    for (index, col) in columns.iter().enumerate() {
        if col.key.trim().is_empty() {
            return Err(TableError::EmptyKey { index });
        }
        if columns[..index].iter().any(|c| c.key == col.key) {
            return Err(TableError::DuplicateKey(col.key.clone()));
        }
    }
    Ok(())
}

fn sort_value(col: &ColumnSpec, row: &RowRecord) -> SortValue {
    let v = col.value(row);
    match col.kind {
        SortKind::Numeric => SortValue::Num(to_number(&v)),
        SortKind::Text => SortValue::Text(normalize_text(&v)),
    }
}

/// NaN sorts after numbers whatever the direction; two NaNs tie.
fn compare(a: &SortValue, b: &SortValue, dir: SortDir) -> Ordering {
    let natural = match (a, b) {
        (SortValue::Num(x), SortValue::Num(y)) => match (x.is_nan(), y.is_nan()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        },
        // UTF-16 unit order: astral chars sort before U+E000..U+FFFF
        (SortValue::Text(x), SortValue::Text(y)) => x.encode_utf16().cmp(y.encode_utf16()),
        // one column, one kind
        _ => Ordering::Equal,
    };
    match dir {
        SortDir::Ascending => natural,
        SortDir::Descending => natural.reverse(),
    }
}
