// src/refresh.rs
//
// One dataset refresh = one blocking extraction + normalization.
// Failures stop here: callers get a RefreshError and decide what to show;
// nothing in this module touches other datasets or cached snapshots.

use thiserror::Error;

use crate::{
    datasets::{DatasetKind, DatasetSpec},
    gateway::{Extract, ExtractionRequest, GatewayError},
    normalize::{self, NormalizationError, Normalized},
    progress::Progress,
};

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Normalization(#[from] NormalizationError),
}

pub fn refresh(
    gateway: &dyn Extract,
    spec: &DatasetSpec,
    with_output_schema: bool,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Normalized, RefreshError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(spec.kind);
        p.log(&format!("Requesting {}…", spec.title));
    }
    logf!("Refresh: Begin dataset={:?} url={}", spec.kind, spec.url);

    let request = ExtractionRequest::for_dataset(spec, with_output_schema);
    let result = gateway
        .extract(&request)
        .map_err(RefreshError::from)
        .and_then(|raw| {
            normalize::normalize_with(&raw, spec.schema, Some(spec.collection_key))
                .map_err(RefreshError::from)
        });

    match &result {
        Ok(n) => {
            logf!(
                "Refresh: OK dataset={:?} rows={} skipped={}",
                spec.kind,
                n.records.len(),
                n.skipped
            );
            if n.skipped > 0 {
                logd!("Refresh: {:?} dropped {} malformed element(s)", spec.kind, n.skipped);
            }
        }
        Err(e) => loge!("Refresh: Error dataset={:?}: {}", spec.kind, e),
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(spec.kind, result.is_ok());
    }
    result
}

/// Refresh each dataset in turn. One failing dataset never stops the others.
pub fn refresh_each(
    gateway: &dyn Extract,
    specs: &[&DatasetSpec],
    with_output_schema: bool,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<(DatasetKind, Result<Normalized, RefreshError>)> {
    let mut out = Vec::with_capacity(specs.len());
    for spec in specs {
        let p: Option<&mut dyn Progress> = match progress.as_mut() {
            Some(p) => Some(&mut **p),
            None => None,
        };
        out.push((spec.kind, refresh(gateway, spec, with_output_schema, p)));
    }
    out
}
