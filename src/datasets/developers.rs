// src/datasets/developers.rs
use super::{DatasetKind, DatasetSpec, FieldSpec, Schema};

static FIELDS: &[FieldSpec] = &[
    FieldSpec::text("username", "Username", "Developer's GitHub username"),
    FieldSpec::text("full_name", "Full Name", "Developer's full name"),
    FieldSpec::text("popular_repo", "Popular Repository", "Name of developer's popular repository"),
    FieldSpec::long_text("repo_description", "Repository Description", "Description of the popular repository"),
    FieldSpec::text("company", "Company", "Company the developer works for"),
];

pub static SPEC: DatasetSpec = DatasetSpec {
    kind: DatasetKind::Developers,
    title: "Trending Developers",
    slug: "developers",
    url: "https://github.com/trending/developers",
    prompt: "Extract information about trending developers including their username, \
             full name, popular repository, repository description, and company. \
             Parse the data from the articles with class 'Box-row'.",
    collection_key: "developers",
    schema: Schema::new(FIELDS),
};
