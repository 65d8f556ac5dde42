// src/progress.rs
/// Lightweight progress reporting for multi-season extraction.
/// Callers implement this to surface status; every method is optional.
pub trait Progress {
    /// Called at the start with the number of season pages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one season page has been parsed.
    fn season_done(&mut self, _year: u16, _legs: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
