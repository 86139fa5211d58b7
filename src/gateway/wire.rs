// src/gateway/wire.rs
//! ScrapeGraphAI `smartscraper` request/response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ExtractionRequest, GatewayError};

#[derive(Debug, Serialize)]
pub struct SmartScraperRequest<'a> {
    pub website_url: &'a str,
    pub user_prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<&'a Value>,
}

impl<'a> From<&'a ExtractionRequest> for SmartScraperRequest<'a> {
    fn from(req: &'a ExtractionRequest) -> Self {
        Self {
            website_url: req.url(),
            user_prompt: req.prompt(),
            output_schema: req.output_schema(),
        }
    }
}

/// Envelope returned by both the submit and the status endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct SmartScraperResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum JobState {
    Done(Value),
    /// Still running upstream; poll with this request id.
    Pending(String),
}

/// Decide what an envelope means for the caller.
pub fn interpret(resp: SmartScraperResponse) -> Result<JobState, GatewayError> {
    let error = resp.error.filter(|e| !e.trim().is_empty());
    let status = resp.status.as_deref().map(str::to_ascii_lowercase);

    match status.as_deref() {
        Some("completed") | Some("success") => Ok(JobState::Done(resp.result)),
        Some("failed") | Some("error") => Err(GatewayError::Upstream {
            status: None,
            message: error.unwrap_or_else(|| s!("extraction failed")),
        }),
        Some("queued") | Some("pending") | Some("processing") | Some("running") => {
            match resp.request_id {
                Some(id) if !id.is_empty() => Ok(JobState::Pending(id)),
                _ => Err(GatewayError::MalformedResponse(s!(
                    "pending job without request_id"
                ))),
            }
        }
        Some(other) => Err(GatewayError::MalformedResponse(format!(
            "unknown job status {other:?}"
        ))),
        None => match error {
            Some(message) => Err(GatewayError::Upstream { status: None, message }),
            None => Ok(JobState::Done(resp.result)),
        },
    }
}
