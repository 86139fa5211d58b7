// src/store.rs
//
// Local cache of the last successful snapshot per dataset:
// `.store/<slug>.json`, in the same structured form as the JSON export.
// Loading goes back through the normalizer, so a hand-edited or stale file
// cannot produce records outside the schema.

use std::{
    error::Error,
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    config::consts::STORE_DIR,
    datasets::DatasetSpec,
    json,
    record::RecordSet,
};

pub fn dataset_path(dir: &Path, spec: &DatasetSpec) -> PathBuf {
    dir.join(join!(spec.slug, ".json"))
}

pub fn save_dataset_in(dir: &Path, spec: &DatasetSpec, set: &RecordSet) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    let path = dataset_path(dir, spec);
    let text = json::to_json_string(set, spec.collection_key)?;
    fs::write(&path, text)?;
    Ok(path)
}

pub fn load_dataset_in(dir: &Path, spec: &DatasetSpec) -> Result<RecordSet, Box<dyn Error>> {
    let path = dataset_path(dir, spec);
    let text = fs::read_to_string(&path)?;
    Ok(json::from_json_str(&text, spec)?)
}

pub fn save_dataset(spec: &DatasetSpec, set: &RecordSet) -> Result<PathBuf, Box<dyn Error>> {
    save_dataset_in(Path::new(STORE_DIR), spec, set)
}

pub fn load_dataset(spec: &DatasetSpec) -> Result<RecordSet, Box<dyn Error>> {
    load_dataset_in(Path::new(STORE_DIR), spec)
}

/// Remove a cached dataset. Missing files are fine.
pub fn clear_dataset_in(dir: &Path, spec: &DatasetSpec) -> io::Result<()> {
    match fs::remove_file(dataset_path(dir, spec)) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
