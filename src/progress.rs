// src/progress.rs
/// Lightweight progress reporting used by long-running jobs (lookup, image downloads).
/// The CLI implements this to print status lines; library callers may pass `None`.
pub trait Progress {
    /// Called at the start with the total number of items.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one unit completes (a lookup batch, a card's artwork).
    fn item_done(&mut self, _index: usize, _label: &str) {}

    /// Called at the end of a successful pass. A failed pass just stops reporting.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
