// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::{datasets::{DatasetKind, spec_for}, progress::Progress};

/// Writes refresh progress into the status line shared with the UI thread.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, kind: DatasetKind) {
        self.set_status(format!("Fetching {}…", spec_for(kind).title));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    // The app reports the outcome once it applies the result.
}
