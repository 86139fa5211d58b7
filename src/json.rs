// src/json.rs
//
// Structured export: `{ "<collection_key>": [ {field: value|null, ...}, ... ] }`.
// Reading it back goes through the normalizer, so an export is also a valid
// cache file.

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::{
    datasets::DatasetSpec,
    normalize::{self, NormalizationError},
    record::RecordSet,
};

struct Document<'a> {
    key: &'a str,
    set: &'a RecordSet,
}

impl Serialize for Document<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.set.mapped())?;
        map.end()
    }
}

pub fn to_json_string(set: &RecordSet, collection_key: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Document { key: collection_key, set })
}

/// Parse an exported document for `spec` back into records.
pub fn from_json_str(text: &str, spec: &DatasetSpec) -> Result<RecordSet, NormalizationError> {
    let raw = serde_json::Value::String(s!(text));
    let normalized = normalize::normalize_with(&raw, spec.schema, Some(spec.collection_key))?;
    Ok(normalized.records)
}
