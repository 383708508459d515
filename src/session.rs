// src/session.rs
//! Per-page-load context.
//!
//! A `Session` is built once per page view: fetch every source the page names,
//! decode each one, and hold the decoded rows for the page builder. Nothing in
//! here outlives the page view, and no two pages share one.
//!
//! ## Typical call chain
//! ```text
//! GUI tab switch → spawn_load() → worker thread: load()
//!                                   ├─ one fetch thread per source (mpsc)
//!                                   └─ decode → Session
//! UI thread: try_recv() → page.build(&session) → PageView → draw
//! ```
//!
//! A failing source aborts the whole load: the page shows one error panel
//! instead of a half-built view.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::config::options::{DashboardOptions, PageKind};
use crate::core::net::{Fetcher, resolve_source};
use crate::csv;
use crate::error::LoadError;
use crate::pages::Page;
use crate::progress::Progress;
use crate::record::RowRecord;

/// One decoded CSV resource.
#[derive(Clone, Debug)]
pub struct Source {
    pub name: String,
    pub rows: Vec<RowRecord>,
}

#[derive(Clone, Debug)]
pub struct Session {
    kind: PageKind,
    sources: Vec<Source>,
}

impl Session {
    pub fn new(kind: PageKind, sources: Vec<Source>) -> Self {
        Self { kind, sources }
    }

    /// Build from already-fetched text, `(source name, csv text)` pairs.
    pub fn from_texts(kind: PageKind, texts: &[(&str, &str)]) -> Self {
        let sources = texts
            .iter()
            .map(|(name, text)| Source { name: s!(*name), rows: csv::decode(text) })
            .collect();
        Self { kind, sources }
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    /// Rows of a named source; empty if the page never loaded it.
    pub fn source(&self, name: &str) -> &[RowRecord] {
        self.sources
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.rows.as_slice())
            .unwrap_or(&[])
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }
}

/// Fetch and decode all of `page`'s sources, concurrently, blocking until done.
pub fn load(
    page: &dyn Page,
    options: &DashboardOptions,
    fetcher: &Fetcher,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Session, LoadError> {
    let names = page.sources();
    let kind = page.kind();
    logf!("Load: Begin page={kind:?} sources={}", names.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(names.len());
    }

    // Resolve every URL up front so a bad base fails before any thread starts
    let urls = names
        .iter()
        .map(|name| resolve_source(&options.data_base_url, name))
        .collect::<Result<Vec<_>, _>>()?;

    type Fetched = (usize, Result<Vec<RowRecord>, LoadError>);
    let (tx, rx) = mpsc::channel::<Fetched>();

    for (ix, url) in urls.into_iter().enumerate() {
        let tx = tx.clone();
        let fetcher = fetcher.clone();
        thread::spawn(move || {
            let _ = tx.send((ix, fetcher.fetch_csv(&url)));
        });
    }
    drop(tx); // this thread is sole receiver now

    let mut decoded: Vec<Option<Vec<RowRecord>>> = vec![None; names.len()];
    let mut outcome: Result<(), LoadError> = Ok(());

    for _ in 0..names.len() {
        match rx.recv() {
            Ok((ix, Ok(rows))) => {
                logd!("Load: {} rows={}", names[ix], rows.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(names[ix], rows.len());
                }
                decoded[ix] = Some(rows);
            }
            Ok((ix, Err(e))) => {
                loge!("Load: {} failed: {e}", names[ix]);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(names[ix]);
                }
                outcome = Err(e);
                break;
            }
            Err(_) => break, // fetch threads ended early; reported below
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    outcome?;

    let mut sources = Vec::with_capacity(names.len());
    for (name, rows) in names.iter().zip(decoded) {
        let rows = rows.ok_or_else(|| LoadError::Interrupted { source_name: s!(*name) })?;
        sources.push(Source { name: s!(*name), rows });
    }

    logf!("Load: OK page={kind:?}");
    Ok(Session::new(kind, sources))
}

/// Run `load` on a worker thread. The UI polls the receiver with `try_recv`;
/// dropping it abandons the load.
pub fn spawn_load<P>(
    page: &'static dyn Page,
    options: DashboardOptions,
    mut progress: P,
) -> Receiver<Result<Session, LoadError>>
where
    P: Progress + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let progress: &mut dyn Progress = &mut progress;
        let result = Fetcher::new().and_then(|fetcher| load(page, &options, &fetcher, Some(progress)));
        let _ = tx.send(result);
    });
    rx
}
