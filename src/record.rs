// src/record.rs
//
// Schema-conformant rows.
//
// - Cell:      one scalar value or the "not available" placeholder.
// - Record:    one cell per schema field, in schema order.
// - RecordSet: ordered records plus the schema that shapes them. Built fresh by
//              the normalizer; replaced wholesale, never edited in place.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::config::consts::SENTINEL;
use crate::datasets::Schema;

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(serde_json::Number),
    NotAvailable,
}

impl Cell {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Number(n) => n.as_i64(),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{n}"),
            Cell::NotAvailable => f.write_str(SENTINEL),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s!(s))
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Number(n) => n.serialize(serializer),
            Cell::NotAvailable => serializer.serialize_none(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    cells: Vec<Cell>,
}

impl Record {
    /// `cells` must line up with the schema the record belongs to.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, schema: &Schema, name: &str) -> Option<&Cell> {
        schema.position(name).and_then(|ix| self.cells.get(ix))
    }

    /// Stringified cells, placeholder rendered verbatim.
    pub fn display_row(&self) -> Vec<String> {
        self.cells.iter().map(|c| c.to_string()).collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordSet {
    schema: Schema,
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(schema: Schema, records: Vec<Record>) -> Self {
        debug_assert!(records.iter().all(|r| r.cells.len() == schema.len()));
        Self { schema, records }
    }

    pub fn empty(schema: Schema) -> Self {
        Self { schema, records: Vec::new() }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export column names.
    pub fn headers(&self) -> Vec<String> {
        self.schema.field_names().into_iter().map(String::from).collect()
    }

    /// Serializable view: each record as `{field: value}` in schema order.
    pub fn mapped(&self) -> MappedRecords<'_> {
        MappedRecords(self)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Serializes as a JSON array of objects, keys in schema order.
pub struct MappedRecords<'a>(&'a RecordSet);

struct MappedRecord<'a> {
    schema: &'a Schema,
    record: &'a Record,
}

impl Serialize for MappedRecords<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let set = self.0;
        let mut seq = serializer.serialize_seq(Some(set.len()))?;
        for record in &set.records {
            seq.serialize_element(&MappedRecord { schema: &set.schema, record })?;
        }
        seq.end()
    }
}

impl Serialize for MappedRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.schema.len()))?;
        for (field, cell) in self.schema.fields().iter().zip(&self.record.cells) {
            map.serialize_entry(field.name, cell)?;
        }
        map.end()
    }
}
