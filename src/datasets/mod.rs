// src/datasets/mod.rs
//! # Dataset definitions
//!
//! One module per GitHub page the dashboard knows how to pull. Each defines a
//! static [`DatasetSpec`]: where the page lives, the natural-language
//! instruction sent to the extraction API, the key the API nests the row list
//! under, and the column schema every normalized record is forced into.
//!
//! ## What lives here
//! - Target URLs and prompts (fixed per dataset).
//! - Field names, on-screen labels, descriptions and kinds.
//!
//! ## What does **not** live here
//! - HTTP (see `gateway`), shaping of results (see `normalize`), caching
//!   (see `data`/`store`), or rendering (see `gui`).
//!
//! Field names are matched against extracted JSON keys exactly. Column order in
//! tables and exports is declaration order.

pub mod collections;
pub mod developers;
pub mod explore;
pub mod topics;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Developers,
    Topics,
    Explore,
    Collections,
}

impl DatasetKind {
    pub fn spec(self) -> &'static DatasetSpec {
        spec_for(self)
    }

    pub fn slug(self) -> &'static str {
        self.spec().slug
    }

    pub fn from_slug(text: &str) -> Option<Self> {
        let t = text.trim().to_ascii_lowercase();
        all().iter().map(|s| s.kind).find(|k| k.slug() == t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text that gets a wide column on screen.
    LongText,
    /// Integer count (stars). Non-numeric input coerces to 0.
    Count,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Exact JSON key and export column name.
    pub name: &'static str,
    /// Column title on screen.
    pub label: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str, description: &'static str) -> Self {
        Self { name, label, description, kind: FieldKind::Text }
    }

    pub const fn long_text(name: &'static str, label: &'static str, description: &'static str) -> Self {
        Self { name, label, description, kind: FieldKind::LongText }
    }

    pub const fn count(name: &'static str, label: &'static str, description: &'static str) -> Self {
        Self { name, label, description, kind: FieldKind::Count }
    }
}

/// Ordered list of fields. Authoritative for display and export columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [FieldSpec],
}

impl Schema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.label).collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

#[derive(Debug)]
pub struct DatasetSpec {
    pub kind: DatasetKind,
    /// Tab title.
    pub title: &'static str,
    /// File stem for exports and the local cache.
    pub slug: &'static str,
    pub url: &'static str,
    pub prompt: &'static str,
    /// Key the API nests the row list under, e.g. `{"developers": [...]}`.
    pub collection_key: &'static str,
    pub schema: Schema,
}

pub static ALL: &[&DatasetSpec] = &[
    &developers::SPEC,
    &topics::SPEC,
    &explore::SPEC,
    &collections::SPEC,
];

pub fn all() -> &'static [&'static DatasetSpec] {
    ALL
}

pub fn spec_for(kind: DatasetKind) -> &'static DatasetSpec {
    match kind {
        DatasetKind::Developers  => &developers::SPEC,
        DatasetKind::Topics      => &topics::SPEC,
        DatasetKind::Explore     => &explore::SPEC,
        DatasetKind::Collections => &collections::SPEC,
    }
}
