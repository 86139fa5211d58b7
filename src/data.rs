// src/data.rs
//
// Per-dataset state owned by the presentation layer.
//
// - Snapshot: the last RecordSet shown for a dataset plus any warning/error.
// - Session:  one Snapshot per dataset, and the in-flight guard that keeps a
//             dataset to a single running refresh.
//
// Only `Session::apply` replaces a snapshot's records, and always wholesale.

use std::collections::{HashMap, HashSet};

use crate::{
    datasets::{DatasetKind, spec_for},
    normalize::Normalized,
    record::RecordSet,
    refresh::RefreshError,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    records: RecordSet,
    /// Non-fatal notice (malformed rows dropped, invalid JSON, no rows).
    pub warning: Option<String>,
    /// Last refresh failure; prior records stay visible.
    pub error: Option<String>,
    /// True once a refresh (not just the disk cache) produced this snapshot.
    pub fresh: bool,
}

impl Snapshot {
    pub fn new(records: RecordSet) -> Self {
        Self { records, warning: None, error: None, fresh: false }
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }
}

/// What `Session::apply` did, for status lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    Replaced { rows: usize, skipped: usize },
    KeptPrevious { error: String },
    Cleared { warning: String },
}

#[derive(Debug, Default)]
pub struct Session {
    snapshots: HashMap<DatasetKind, Snapshot>,
    in_flight: HashSet<DatasetKind>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: DatasetKind) -> Option<&Snapshot> {
        self.snapshots.get(&kind)
    }

    pub fn records(&self, kind: DatasetKind) -> Option<&RecordSet> {
        self.snapshots.get(&kind).map(Snapshot::records)
    }

    /// Install a snapshot loaded from the local cache.
    pub fn seed(&mut self, kind: DatasetKind, records: RecordSet) {
        self.snapshots.insert(kind, Snapshot::new(records));
    }

    /// Mark a refresh as started. Returns false if one is already running.
    pub fn begin(&mut self, kind: DatasetKind) -> bool {
        self.in_flight.insert(kind)
    }

    pub fn end(&mut self, kind: DatasetKind) {
        self.in_flight.remove(&kind);
    }

    pub fn is_in_flight(&self, kind: DatasetKind) -> bool {
        self.in_flight.contains(&kind)
    }

    /// Fold a refresh result into the dataset's snapshot and clear its
    /// in-flight mark.
    ///
    /// - success replaces the records;
    /// - a gateway failure keeps whatever was there and records the error;
    /// - invalid JSON empties the records and leaves a warning.
    pub fn apply(
        &mut self,
        kind: DatasetKind,
        result: Result<Normalized, RefreshError>,
    ) -> Applied {
        self.end(kind);
        let schema = spec_for(kind).schema;
        let snap = self
            .snapshots
            .entry(kind)
            .or_insert_with(|| Snapshot::new(RecordSet::empty(schema)));

        match result {
            Ok(Normalized { records, skipped }) => {
                let rows = records.len();
                snap.records = records;
                snap.error = None;
                snap.fresh = true;
                snap.warning = if skipped > 0 {
                    Some(format!("{skipped} malformed row(s) dropped"))
                } else if rows == 0 {
                    Some(s!("No data available. Please try refreshing."))
                } else {
                    None
                };
                Applied::Replaced { rows, skipped }
            }
            Err(RefreshError::Gateway(e)) => {
                let error = e.to_string();
                snap.error = Some(error.clone());
                Applied::KeptPrevious { error }
            }
            Err(RefreshError::Normalization(e)) => {
                let warning = e.to_string();
                snap.records = RecordSet::empty(schema);
                snap.error = None;
                snap.fresh = true;
                snap.warning = Some(warning.clone());
                Applied::Cleared { warning }
            }
        }
    }
}
