// src/datasets/collections.rs
use super::{DatasetKind, DatasetSpec, FieldSpec, Schema};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::text("title", "Collection", "Collection title"),
    FieldSpec::long_text("description", "Description", "Collection description"),
];

pub static SPEC: DatasetSpec = DatasetSpec {
    kind: DatasetKind::Collections,
    title: "Collections",
    slug: "collections",
    url: "https://github.com/collections",
    prompt: "Extract collections including title and description",
    collection_key: "collections",
    schema: Schema::new(FIELDS),
};
