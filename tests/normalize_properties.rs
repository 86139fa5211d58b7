// tests/normalize_properties.rs
use serde_json::{Value, json};

use gh_insights::s;

use gh_insights::datasets::{collections, developers, explore, topics};
use gh_insights::normalize::{NormalizationError, normalize, normalize_with};
use gh_insights::record::Cell;

fn texts(row: &[Cell]) -> Vec<String> {
    row.iter().map(|c| c.to_string()).collect()
}

#[test]
fn full_mapping_is_identity() {
    let raw = json!([{
        "username": "ada",
        "full_name": "Ada Lovelace",
        "popular_repo": "engine",
        "repo_description": "analytical",
        "company": "none",
    }]);
    let out = normalize(&raw, developers::SPEC.schema).unwrap();
    assert_eq!(out.skipped, 0);
    assert_eq!(out.records.len(), 1);
    assert_eq!(
        texts(out.records.records()[0].cells()),
        ["ada", "Ada Lovelace", "engine", "analytical", "none"]
    );
}

#[test]
fn string_wrapping_is_transparent() {
    let list = json!([
        {"name": "rust", "description": "systems"},
        {"name": "go", "description": "servers"},
    ]);
    let wrapped = Value::String(list.to_string());

    let a = normalize(&list, topics::SPEC.schema).unwrap();
    let b = normalize(&wrapped, topics::SPEC.schema).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.records.len(), 2);
}

#[test]
fn empty_list_is_empty_not_error() {
    let out = normalize(&json!([]), explore::SPEC.schema).unwrap();
    assert!(out.records.is_empty());
    assert_eq!(out.skipped, 0);

    let out = normalize(&Value::String(s!("[]")), explore::SPEC.schema).unwrap();
    assert!(out.records.is_empty());
}

#[test]
fn missing_field_gets_placeholder_only_there() {
    let raw = json!([{"title": "Made in Africa"}]);
    let out = normalize(&raw, collections::SPEC.schema).unwrap();
    let cells = out.records.records()[0].cells();
    assert_eq!(cells[0], Cell::from("Made in Africa"));
    assert_eq!(cells[1], Cell::NotAvailable);
    assert_eq!(cells[1].to_string(), "N/A");
}

#[test]
fn null_field_gets_placeholder() {
    let raw = json!([{"title": null, "description": "d"}]);
    let out = normalize(&raw, collections::SPEC.schema).unwrap();
    assert_eq!(texts(out.records.records()[0].cells()), ["N/A", "d"]);
}

#[test]
fn malformed_element_is_dropped() {
    let raw = json!([
        {"name": "rust", "description": "systems"},
        "{not json",
    ]);
    let out = normalize(&raw, topics::SPEC.schema).unwrap();
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.skipped, 1);
}

#[test]
fn non_object_elements_are_dropped_in_order() {
    let raw = json!([
        {"name": "a"},
        42,
        null,
        ["nested"],
        "{\"name\": \"b\"}",
        {"name": "c"},
    ]);
    let out = normalize(&raw, topics::SPEC.schema).unwrap();
    let names: Vec<String> = out
        .records
        .iter()
        .map(|r| r.cells()[0].to_string())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(out.skipped, 3);
}

#[test]
fn invalid_top_level_string_fails_whole_dataset() {
    let raw = Value::String(s!("Sorry, I could not read that page."));
    let err = normalize(&raw, topics::SPEC.schema).unwrap_err();
    assert!(matches!(err, NormalizationError::InvalidJson { .. }));
}

#[test]
fn single_object_is_wrapped() {
    let raw = json!({"name": "rust", "description": "systems"});
    let out = normalize(&raw, topics::SPEC.schema).unwrap();
    assert_eq!(out.records.len(), 1);
}

#[test]
fn extra_keys_dropped_and_exact_match_only() {
    let raw = json!([{"Name": "wrong case", "name": "right", "stars_today": 5}]);
    let out = normalize(&raw, explore::SPEC.schema).unwrap();
    let rec = &out.records.records()[0];
    let schema = out.records.schema();
    assert_eq!(rec.get(schema, "name"), Some(&Cell::from("right")));
    assert_eq!(rec.get(schema, "stars_today"), None);
    assert_eq!(rec.cells().len(), 4);
}

#[test]
fn developer_string_result() {
    let raw = Value::String(s!(
        r#"[{"username":"ada","full_name":"Ada L.","popular_repo":"proj1"}]"#
    ));
    let spec = &developers::SPEC;
    let out = normalize_with(&raw, spec.schema, Some(spec.collection_key)).unwrap();
    assert_eq!(out.records.len(), 1);
    assert_eq!(
        texts(out.records.records()[0].cells()),
        ["ada", "Ada L.", "proj1", "N/A", "N/A"]
    );
}

#[test]
fn envelope_under_collection_key() {
    let spec = &topics::SPEC;
    let raw = json!({"featured_topics": [{"name": "rust"}, {"name": "wasm"}]});
    let out = normalize_with(&raw, spec.schema, Some(spec.collection_key)).unwrap();
    assert_eq!(out.records.len(), 2);

    // nested JSON string under the key
    let raw = json!({"featured_topics": "[{\"name\": \"rust\"}]"});
    let out = normalize_with(&raw, spec.schema, Some(spec.collection_key)).unwrap();
    assert_eq!(out.records.len(), 1);
}

#[test]
fn object_without_collection_key_is_one_record() {
    let spec = &topics::SPEC;
    let raw = json!({"meta": [1, 2, 3]});

    let out = normalize_with(&raw, spec.schema, Some(spec.collection_key)).unwrap();
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.skipped, 0);
    assert_eq!(texts(out.records.records()[0].cells()), ["N/A", "N/A"]);

    let out = normalize(&raw, spec.schema).unwrap();
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.skipped, 0);
}

#[test]
fn collection_key_is_ignored_without_envelope_handling() {
    let raw = json!({"featured_topics": [{"name": "rust"}]});
    let out = normalize(&raw, topics::SPEC.schema).unwrap();
    // read as one record that happens to have no schema fields
    assert_eq!(out.records.len(), 1);
    assert_eq!(texts(out.records.records()[0].cells()), ["N/A", "N/A"]);
}

#[test]
fn record_with_list_value_is_not_unwrapped() {
    // has a schema field, so it is a record even though it holds an array
    let raw = json!({"name": "rust", "tags": ["a", "b"]});
    let out = normalize(&raw, topics::SPEC.schema).unwrap();
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records.records()[0].cells()[0], Cell::from("rust"));
}

#[test]
fn star_counts_are_coerced() {
    let raw = json!([
        {"name": "a", "stars": 1200},
        {"name": "b", "stars": "3,456"},
        {"name": "c", "stars": "12.5k"},
        {"name": "d", "stars": "many"},
        {"name": "e"},
    ]);
    let out = normalize(&raw, explore::SPEC.schema).unwrap();
    let stars: Vec<Option<i64>> = out.records.iter().map(|r| r.cells()[2].as_i64()).collect();
    assert_eq!(stars, [Some(1200), Some(3456), Some(12_500), Some(0), None]);
    assert_eq!(out.records.records()[4].cells()[2], Cell::NotAvailable);
}
