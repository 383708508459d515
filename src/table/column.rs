// src/table/column.rs
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::config::consts::{PLACEHOLDER, SORT_ASC_HINT, SORT_DESC_HINT};
use crate::record::RowRecord;

/// Row → display value, for columns that aren't a plain field lookup.
pub type ComputeFn = Arc<dyn Fn(&RowRecord) -> String + Send + Sync>;
/// Value → display string.
pub type FormatFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// How a column's values compare when sorting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKind {
    /// Coerced to `f64`; non-numbers sort last in both directions.
    Numeric,
    /// Diacritic-folded, lower-cased text.
    #[default]
    Text,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDir {
    Ascending,
    #[default]
    Descending,
}

impl SortDir {
    pub fn flipped(self) -> Self {
        match self {
            SortDir::Ascending => SortDir::Descending,
            SortDir::Descending => SortDir::Ascending,
        }
    }

    /// Header indicator glyph.
    pub fn hint(self) -> &'static str {
        match self {
            SortDir::Ascending => SORT_ASC_HINT,
            SortDir::Descending => SORT_DESC_HINT,
        }
    }
}

/// One table column. Built with `text`/`numeric` and the chained setters;
/// the table validates the full set when it is constructed.
#[derive(Clone)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
    pub kind: SortKind,
    pub sortable: bool,
    pub align: Align,
    pub default_dir: Option<SortDir>,
    compute: Option<ComputeFn>,
    format: Option<FormatFn>,
}

impl ColumnSpec {
    pub fn new(key: &str, label: &str, kind: SortKind) -> Self {
        Self {
            key: s!(key),
            label: s!(label),
            kind,
            sortable: true,
            align: Align::Left,
            default_dir: None,
            compute: None,
            format: None,
        }
    }

    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, SortKind::Text)
    }

    /// Numeric column, right-aligned.
    pub fn numeric(key: &str, label: &str) -> Self {
        Self::new(key, label, SortKind::Numeric).align(Align::Right)
    }

    pub fn compute(mut self, f: impl Fn(&RowRecord) -> String + Send + Sync + 'static) -> Self {
        self.compute = Some(Arc::new(f));
        self
    }

    pub fn format(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.format = Some(Arc::new(f));
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn default_dir(mut self, dir: SortDir) -> Self {
        self.default_dir = Some(dir);
        self
    }

    /// Computed value, or the field itself.
    pub fn value<'r>(&self, row: &'r RowRecord) -> Cow<'r, str> {
        match &self.compute {
            Some(f) => Cow::Owned(f(row)),
            None => Cow::Borrowed(row.value(&self.key)),
        }
    }

    /// Final cell text: value → formatter → placeholder when empty.
    pub fn display(&self, row: &RowRecord) -> String {
        let value = self.value(row);
        let text = match &self.format {
            Some(f) => f(value.as_ref()),
            None => value.into_owned(),
        };
        if text.is_empty() { s!(PLACEHOLDER) } else { text }
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("default_dir", &self.default_dir)
            .field("compute", &self.compute.is_some())
            .field("format", &self.format.is_some())
            .finish()
    }
}
