// src/gui/router.rs
use crate::datasets::{self, DatasetSpec};

/// Tabs in display order.
pub fn all_pages() -> &'static [&'static DatasetSpec] {
    datasets::all()
}

/// Out-of-range indices clamp to the last tab.
pub fn page_at(index: usize) -> &'static DatasetSpec {
    let pages = all_pages();
    pages[index.min(pages.len() - 1)]
}
