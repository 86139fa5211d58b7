// src/gateway/mod.rs
//! Boundary to the hosted extraction service.
//!
//! The rest of the crate only sees [`Extract`]: hand it an
//! [`ExtractionRequest`] (page URL, instruction, optional output shape) and get
//! back an untyped [`RawResult`] or a [`GatewayError`]. [`ScrapeGraphClient`]
//! is the real implementation; tests and the GUI can swap in anything else.
//!
//! One call per refresh. No retries, no backoff, no rate limiting; every HTTP
//! request carries a timeout.

mod client;
mod error;
pub mod output_schema;
pub mod wire;

pub use client::ScrapeGraphClient;
pub use error::GatewayError;

use serde_json::Value;

use crate::datasets::DatasetSpec;

/// Untyped payload as returned by the service. No shape is guaranteed.
pub type RawResult = Value;

#[derive(Clone, Debug, PartialEq)]
pub struct ExtractionRequest {
    url: String,
    prompt: String,
    output_schema: Option<Value>,
}

impl ExtractionRequest {
    pub fn new(url: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            prompt: prompt.into(),
            output_schema: None,
        }
    }

    pub fn with_output_schema(mut self, schema: Value) -> Self {
        self.output_schema = Some(schema);
        self
    }

    /// The fixed request for one dashboard dataset.
    pub fn for_dataset(spec: &DatasetSpec, with_output_schema: bool) -> Self {
        let req = Self::new(spec.url, spec.prompt);
        if with_output_schema {
            req.with_output_schema(output_schema::for_dataset(spec))
        } else {
            req
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn output_schema(&self) -> Option<&Value> {
        self.output_schema.as_ref()
    }
}

/// Runs one extraction. Blocking; callers that must stay responsive run it on
/// a worker thread.
pub trait Extract: Send + Sync {
    fn extract(&self, request: &ExtractionRequest) -> Result<RawResult, GatewayError>;
}
