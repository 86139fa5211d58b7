// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,refresh}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod refresh; // src/gui/actions/refresh.rs

pub use copy::copy;
pub use export::export;
pub use refresh::refresh;

use crate::{gui::app::App, record::RecordSet};

/// Records of the current tab, if it has any rows.
#[inline]
pub(super) fn current_records(app: &App) -> Option<&RecordSet> {
    app.session
        .records(app.current_kind())
        .filter(|set| !set.is_empty())
}
