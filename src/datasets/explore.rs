// src/datasets/explore.rs
use super::{DatasetKind, DatasetSpec, FieldSpec, Schema};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Repository", "Repository name, as owner/name when shown"),
    FieldSpec::long_text("description", "Description", "Repository description"),
    FieldSpec::count("stars", "Stars", "Number of GitHub stars"),
    FieldSpec::text("language", "Language", "Primary programming language"),
];

pub static SPEC: DatasetSpec = DatasetSpec {
    kind: DatasetKind::Explore,
    title: "Explore",
    slug: "explore",
    url: "https://github.com/explore",
    prompt: "Extract trending repositories including name, description, and stars",
    collection_key: "trending_repositories",
    schema: Schema::new(FIELDS),
};
