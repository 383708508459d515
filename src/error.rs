// src/error.rs
//! Library error types.
//!
//! Two families, matching the two ways a page can go wrong:
//! - `LoadError`: the page never got its data (bad URL, network, HTTP status).
//!   Caught at the page boundary and shown as a static error panel.
//! - `TableError`: a page handed the table an invalid column layout. These are
//!   programmer errors in page definitions, reported at construction time.
//!
//! Decode and compute anomalies are *not* errors: they degrade to empty strings
//! and NaN, and render as the placeholder.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid data URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to load CSV ({status}) → {url}")]
    Http { status: u16, url: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("loader for `{source_name}` stopped before returning a result")]
    Interrupted { source_name: String },
}

impl LoadError {
    /// HTTP status code, when the failure was a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table needs at least one column")]
    NoColumns,

    #[error("column {index} has an empty key")]
    EmptyKey { index: usize },

    #[error("duplicate column key `{0}`")]
    DuplicateKey(String),

    #[error("initial sort key `{0}` does not name a column")]
    UnknownSortKey(String),

    #[error("initial sort key `{0}` names an unsortable column")]
    UnsortableSortKey(String),
}
