// src/progress.rs
/// Lightweight progress reporting used by long-running operations (fetch/export).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of sources.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one source has been fetched and extracted.
    fn item_done(&mut self, _source: &str, _records: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
