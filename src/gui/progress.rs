// src/gui/progress.rs
use std::sync::{Arc, Mutex, PoisonError};

use crate::progress::Progress;

/// Writes load progress into the status line the bottom bar shows.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        set_status(&self.status, msg);
    }
}

/// Replace the shared status text. A poisoned lock still holds a usable string.
pub fn set_status(status: &Mutex<String>, msg: impl Into<String>) {
    *status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
}

pub fn read_status(status: &Mutex<String>) -> String {
    status.lock().unwrap_or_else(PoisonError::into_inner).clone()
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.set_status(format!("Loading {total} file(s)…"));
    }
    fn item_done(&mut self, source: &str, rows: usize) {
        self.done += 1;
        self.set_status(format!("Fetched {source}: {rows} rows ({}/{})", self.done, self.total));
    }
    fn item_failed(&mut self, source: &str) {
        self.set_status(format!("Failed to fetch {source}"));
    }
    fn finish(&mut self) {
        if self.done == self.total {
            self.set_status(format!("Ready ({}/{})", self.done, self.total));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sources() {
        let status = Arc::new(Mutex::new(s!("Idle")));
        let mut p = GuiProgress::new(status.clone());
        p.begin(2);
        p.item_done("a.csv", 3);
        assert_eq!(read_status(&status), "Fetched a.csv: 3 rows (1/2)");
        p.item_failed("b.csv");
        p.finish();
        assert_eq!(read_status(&status), "Failed to fetch b.csv");
    }
}
