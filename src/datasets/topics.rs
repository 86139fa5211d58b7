// src/datasets/topics.rs
use super::{DatasetKind, DatasetSpec, FieldSpec, Schema};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Topic Name", "Name of the topic"),
    FieldSpec::long_text("description", "Description", "Short description of the topic"),
];

pub static SPEC: DatasetSpec = DatasetSpec {
    kind: DatasetKind::Topics,
    title: "Topics",
    slug: "topics",
    url: "https://github.com/topics",
    prompt: "Extract featured topics including name and description",
    collection_key: "featured_topics",
    schema: Schema::new(FIELDS),
};
