// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::datasets::DatasetSpec;
use crate::record::RecordSet;
use crate::{csv, json};

/// Render a record set in one single-file format.
pub fn to_export_string(
    spec: &DatasetSpec,
    set: &RecordSet,
    format: ExportFormat,
) -> Result<String, Box<dyn Error>> {
    match format {
        ExportFormat::Csv => Ok(csv::to_csv_string(set)),
        ExportFormat::Json => Ok(json::to_json_string(set, spec.collection_key)?),
        ExportFormat::Both => Err("`both` is not a single-file format".into()),
    }
}

/// Write `<dir>/<slug>.<ext>` for one format. Returns the path written.
pub fn write_export(
    dir: &Path,
    spec: &DatasetSpec,
    set: &RecordSet,
    format: ExportFormat,
) -> Result<PathBuf, Box<dyn Error>> {
    ensure_directory(dir)?;
    let path = dir.join(join!(spec.slug, ".", format.ext()));
    let contents = to_export_string(spec, set, format)?;
    fs::write(&path, contents)?;
    Ok(path)
}

/// Write every file `export.format` asks for.
pub fn export_dataset(
    export: &ExportOptions,
    spec: &DatasetSpec,
    set: &RecordSet,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut written = Vec::with_capacity(2);
    for &format in export.format.files() {
        let path = write_export(export.out_dir(), spec, set, format)?;
        logf!("Export: {:?} rows={} → {}", spec.kind, set.len(), path.display());
        written.push(path);
    }
    Ok(written)
}

/// Export several datasets. A failure is reported for that dataset only; the
/// rest are still written.
pub fn export_each<'a, I>(
    export: &ExportOptions,
    items: I,
) -> Vec<(&'static DatasetSpec, Result<Vec<PathBuf>, Box<dyn Error>>)>
where
    I: IntoIterator<Item = (&'static DatasetSpec, &'a RecordSet)>,
{
    items
        .into_iter()
        .map(|(spec, set)| {
            let res = export_dataset(export, spec, set);
            if let Err(e) = &res {
                loge!("Export: {:?} failed: {}", spec.kind, e);
            }
            (spec, res)
        })
        .collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
