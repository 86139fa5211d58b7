// tests/export_e2e.rs
use std::fs;

use serde_json::{Value, json};
use tempfile::tempdir;

use gh_insights::config::options::{ExportFormat, ExportOptions};
use gh_insights::csv::to_csv_string;
use gh_insights::datasets::{developers, explore, topics};
use gh_insights::file::{export_dataset, export_each, write_export};
use gh_insights::json::{from_json_str, to_json_string};
use gh_insights::normalize::normalize;
use gh_insights::record::RecordSet;
use gh_insights::store;

fn explore_set() -> RecordSet {
    let raw = json!([
        {"name": "rust-lang/rust", "description": "Empowering everyone", "stars": 99000, "language": "Rust"},
        {"name": "acme/tool", "description": "Has, commas and \"quotes\"", "stars": "1.2k"},
    ]);
    normalize(&raw, explore::SPEC.schema).unwrap().records
}

#[test]
fn csv_header_is_field_names_and_placeholder_is_verbatim() {
    let text = to_csv_string(&explore_set());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "name,description,stars,language",
            "rust-lang/rust,Empowering everyone,99000,Rust",
            "acme/tool,\"Has, commas and \"\"quotes\"\"\",1200,N/A",
        ]
    );
}

#[test]
fn empty_set_exports_header_only() {
    let set = RecordSet::empty(topics::SPEC.schema);
    assert_eq!(to_csv_string(&set), "name,description\n");

    let doc: Value = serde_json::from_str(&to_json_string(&set, "featured_topics").unwrap()).unwrap();
    assert_eq!(doc, json!({"featured_topics": []}));
}

#[test]
fn json_is_keyed_with_raw_values() {
    let text = to_json_string(&explore_set(), explore::SPEC.collection_key).unwrap();
    let doc: Value = serde_json::from_str(&text).unwrap();
    let rows = doc["trending_repositories"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["stars"], json!(99000));
    assert_eq!(rows[1]["language"], Value::Null);

    // keys keep schema order
    let keys: Vec<&str> = text
        .lines()
        .filter_map(|l| l.trim().strip_prefix('"'))
        .filter_map(|l| l.split('"').next())
        .skip(1)
        .take(4)
        .collect();
    assert_eq!(keys, ["name", "description", "stars", "language"]);
}

#[test]
fn json_round_trip_preserves_values_and_order() {
    let set = explore_set();
    let text = to_json_string(&set, explore::SPEC.collection_key).unwrap();
    let back = from_json_str(&text, &explore::SPEC).unwrap();
    assert_eq!(back, set);
}

#[test]
fn files_are_named_after_the_dataset() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("nested").join("out");
    let set = explore_set();

    let csv = write_export(&out, &explore::SPEC, &set, ExportFormat::Csv).unwrap();
    let json = write_export(&out, &explore::SPEC, &set, ExportFormat::Json).unwrap();
    assert_eq!(csv.file_name().unwrap(), "explore.csv");
    assert_eq!(json.file_name().unwrap(), "explore.json");
    assert!(fs::read_to_string(&csv).unwrap().starts_with("name,description,stars,language\n"));
}

#[test]
fn both_writes_two_files() {
    let dir = tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.set_dir(dir.path().to_str().unwrap());
    opts.format = ExportFormat::Both;

    let set = normalize(&json!([{"username": "ada"}]), developers::SPEC.schema)
        .unwrap()
        .records;
    let written = export_dataset(&opts, &developers::SPEC, &set).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["developers.csv", "developers.json"]);
}

#[test]
fn cache_round_trips_through_store() {
    let dir = tempdir().unwrap();
    let set = explore_set();
    store::save_dataset_in(dir.path(), &explore::SPEC, &set).unwrap();
    let back = store::load_dataset_in(dir.path(), &explore::SPEC).unwrap();
    assert_eq!(back, set);

    store::clear_dataset_in(dir.path(), &explore::SPEC).unwrap();
    assert!(store::load_dataset_in(dir.path(), &explore::SPEC).is_err());
    // clearing twice is fine
    store::clear_dataset_in(dir.path(), &explore::SPEC).unwrap();
}

#[test]
fn one_failed_export_does_not_stop_the_rest() {
    let dir = tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.set_dir(dir.path().to_str().unwrap());
    opts.format = ExportFormat::Both;

    // a directory where topics.json should go
    fs::create_dir_all(dir.path().join("topics.json")).unwrap();

    let devs = normalize(&json!([{"username": "ada"}]), developers::SPEC.schema).unwrap().records;
    let tops = normalize(&json!([{"name": "rust"}]), topics::SPEC.schema).unwrap().records;
    let repos = explore_set();

    let results = export_each(
        &opts,
        [
            (&developers::SPEC, &devs),
            (&topics::SPEC, &tops),
            (&explore::SPEC, &repos),
        ],
    );

    let outcome: Vec<(&str, bool)> = results.iter().map(|(s, r)| (s.slug, r.is_ok())).collect();
    assert_eq!(outcome, [("developers", true), ("topics", false), ("explore", true)]);

    assert!(dir.path().join("developers.json").is_file());
    assert!(dir.path().join("explore.csv").is_file());
    assert!(dir.path().join("explore.json").is_file());
    assert!(dir.path().join("topics.json").is_dir());
}
