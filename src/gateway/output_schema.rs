// src/gateway/output_schema.rs
//! JSON Schema describing the shape we want back for a dataset:
//! `{ "<collection_key>": [ { field: string|integer, ... } ] }`.

use serde_json::{Map, Value, json};

use crate::datasets::{DatasetSpec, FieldKind};

pub fn for_dataset(spec: &DatasetSpec) -> Value {
    let mut properties = Map::new();
    for field in spec.schema.fields() {
        let ty = match field.kind {
            FieldKind::Count => "integer",
            FieldKind::Text | FieldKind::LongText => "string",
        };
        properties.insert(
            s!(field.name),
            json!({ "type": ty, "description": field.description }),
        );
    }

    // First column is the row's identity (username, name, title).
    let required: Vec<&str> = spec.schema.fields().iter().take(1).map(|f| f.name).collect();

    json!({
        "title": spec.title,
        "type": "object",
        "properties": {
            spec.collection_key: {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        },
        "required": [spec.collection_key],
    })
}
