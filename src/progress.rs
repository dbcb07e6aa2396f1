// src/progress.rs
/// Lightweight progress reporting used by long-running operations (batch
/// fetch/export). Frontends (GUI/CLI) implement this to surface status.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One report finished (fetched and written).
    fn item_done(&mut self, _report_id: &str) {}

    /// One report failed; the run continues.
    fn item_failed(&mut self, _report_id: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
