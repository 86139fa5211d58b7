// src/progress.rs
use crate::datasets::DatasetKind;

/// Lightweight progress reporting used by refreshes.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called when a dataset refresh starts.
    fn begin(&mut self, _kind: DatasetKind) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _kind: DatasetKind, _ok: bool) {}
}
