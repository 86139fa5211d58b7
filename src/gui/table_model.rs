// src/gui/table_model.rs
//! Display-ready copy of a [`RecordSet`].
//!
//! Built once per snapshot change, not per frame. Cells are already
//! stringified: the placeholder reads `N/A` and available counts carry a star,
//! so `data_table` only lays things out.

use crate::{
    datasets::{FieldKind, Schema},
    record::{Cell, RecordSet},
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub kinds: Vec<FieldKind>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Headers only; used before a dataset has any data.
    pub fn for_schema(schema: &Schema) -> Self {
        Self {
            headers: schema.labels().into_iter().map(String::from).collect(),
            kinds: schema.fields().iter().map(|f| f.kind).collect(),
            rows: Vec::new(),
        }
    }

    pub fn from_records(set: &RecordSet) -> Self {
        let mut table = Self::for_schema(set.schema());
        table.rows = set
            .iter()
            .map(|record| {
                record
                    .cells()
                    .iter()
                    .zip(&table.kinds)
                    .map(|(cell, kind)| display_cell(cell, *kind))
                    .collect()
            })
            .collect();
        table
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }
}

fn display_cell(cell: &Cell, kind: FieldKind) -> String {
    match (kind, cell) {
        (FieldKind::Count, Cell::Number(n)) => format!("{n} ⭐"),
        _ => cell.to_string(),
    }
}
