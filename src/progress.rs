// src/progress.rs
/// Lightweight progress reporting for page loads.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sources to fetch.
    fn begin(&mut self, _total: usize) {}

    /// One source fetched and decoded.
    fn item_done(&mut self, _source: &str, _rows: usize) {}

    /// One source failed; the load is about to be aborted.
    fn item_failed(&mut self, _source: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
