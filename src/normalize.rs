// src/normalize.rs
//! Coerces whatever the extraction API returned into a [`RecordSet`].
//!
//! The API gives no shape guarantee: the same query may come back as a list of
//! objects, one object, a JSON document inside a string, a list of such strings,
//! or the list nested under a key such as `{"developers": [...]}`. This module is
//! a pure function over [`serde_json::Value`] that handles each case explicitly.
//!
//! Policy:
//! - A top-level string that is not valid JSON fails the whole dataset
//!   ([`NormalizationError::InvalidJson`]).
//! - A malformed element (unparsable string, or not an object) is dropped and
//!   counted in [`Normalized::skipped`]; one bad row never sinks the rest.
//! - Schema fields are looked up by exact key. Missing or `null` fields become
//!   [`Cell::NotAvailable`]; keys outside the schema are dropped.
//! - Count fields accept numbers and numeric strings; anything else becomes 0.

use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::datasets::{FieldKind, FieldSpec, Schema};
use crate::record::{Cell, Record, RecordSet};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("result is not valid JSON: {reason}")]
    InvalidJson { reason: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Normalized {
    pub records: RecordSet,
    /// Elements dropped because they were not records.
    pub skipped: usize,
}

/// Normalize without envelope handling.
pub fn normalize(raw: &Value, schema: Schema) -> Result<Normalized, NormalizationError> {
    normalize_with(raw, schema, None)
}

/// Normalize, first descending into `collection_key` when the payload is an
/// object holding that key. Any other object is a single record.
pub fn normalize_with(
    raw: &Value,
    schema: Schema,
    collection_key: Option<&str>,
) -> Result<Normalized, NormalizationError> {
    let top = decode_top(raw)?;
    let top = unwrap_envelope(top, collection_key)?;

    let elements: Vec<Value> = match top {
        Value::Array(items) => items,
        other => vec![other],
    };

    let mut records = Vec::with_capacity(elements.len());
    let mut skipped = 0usize;

    for element in elements {
        match element_to_object(element) {
            Some(obj) => records.push(build_record(&obj, &schema)),
            None => skipped += 1,
        }
    }

    Ok(Normalized {
        records: RecordSet::new(schema, records),
        skipped,
    })
}

/// Parse a string payload; everything else passes through.
fn decode_top(raw: &Value) -> Result<Value, NormalizationError> {
    match raw {
        Value::String(text) => parse_json(text),
        other => Ok(other.clone()),
    }
}

fn parse_json(text: &str) -> Result<Value, NormalizationError> {
    serde_json::from_str(text).map_err(|e| NormalizationError::InvalidJson {
        reason: e.to_string(),
    })
}

fn unwrap_envelope(top: Value, collection_key: Option<&str>) -> Result<Value, NormalizationError> {
    match (top, collection_key) {
        (Value::Object(mut obj), Some(key)) => match obj.remove(key) {
            Some(inner) => decode_top(&inner),
            None => Ok(Value::Object(obj)),
        },
        (top, _) => Ok(top),
    }
}

fn element_to_object(element: Value) -> Option<Map<String, Value>> {
    let element = match element {
        Value::String(text) => serde_json::from_str(&text).ok()?,
        other => other,
    };
    match element {
        Value::Object(obj) => Some(obj),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Array(_) => None,
    }
}

fn build_record(obj: &Map<String, Value>, schema: &Schema) -> Record {
    let cells = schema
        .fields()
        .iter()
        .map(|field| to_cell(field, obj.get(field.name)))
        .collect();
    Record::new(cells)
}

fn to_cell(field: &FieldSpec, value: Option<&Value>) -> Cell {
    let value = match value {
        None | Some(Value::Null) => return Cell::NotAvailable,
        Some(v) => v,
    };

    match field.kind {
        FieldKind::Count => Cell::Number(coerce_count(value)),
        FieldKind::Text | FieldKind::LongText => match value {
            Value::String(s) => Cell::Text(s.clone()),
            Value::Number(n) => Cell::Number(n.clone()),
            Value::Bool(b) => Cell::Text(b.to_string()),
            Value::Array(_) | Value::Object(_) => Cell::Text(value.to_string()),
            Value::Null => Cell::NotAvailable,
        },
    }
}

/// Numbers pass through; numeric strings are parsed; everything else is 0.
fn coerce_count(value: &Value) -> Number {
    match value {
        Value::Number(n) => n.clone(),
        Value::String(s) => parse_count(s).map(Number::from).unwrap_or_else(|| Number::from(0)),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => Number::from(0),
    }
}

/// Accepts `1234`, `1,234`, `12.3k`, `1.2M`, with optional surrounding text
/// such as a trailing star glyph stripped.
pub fn parse_count(text: &str) -> Option<i64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | ' '))
        .collect();
    let cleaned = cleaned.trim_end_matches(|c: char| !c.is_ascii_alphanumeric() && c != '.');

    let (digits, multiplier) = match cleaned.chars().last()? {
        'k' | 'K' => (&cleaned[..cleaned.len() - 1], 1_000f64),
        'm' | 'M' => (&cleaned[..cleaned.len() - 1], 1_000_000f64),
        _ => (cleaned, 1f64),
    };

    if let Ok(n) = digits.parse::<i64>() {
        return n.checked_mul(multiplier as i64);
    }
    let f = digits.parse::<f64>().ok()?;
    if !f.is_finite() {
        return None;
    }
    Some((f * multiplier).round() as i64)
}
