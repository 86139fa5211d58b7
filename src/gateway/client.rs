// src/gateway/client.rs
// Blocking HTTP client for the ScrapeGraphAI smartscraper endpoint.

use std::thread;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};

use crate::config::consts::{API_KEY_HEADER, USER_AGENT};
use crate::config::options::{ApiKey, GatewayOptions};

use super::wire::{self, JobState, SmartScraperRequest, SmartScraperResponse};
use super::{Extract, ExtractionRequest, GatewayError, RawResult};

/// Longest upstream error body kept in an error message.
const MAX_ERROR_BODY: usize = 500;

pub struct ScrapeGraphClient {
    http: Client,
    api_key: ApiKey,
    options: GatewayOptions,
}

impl ScrapeGraphClient {
    pub fn new(api_key: ApiKey, options: GatewayOptions) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(options.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(GatewayError::Network)?;
        Ok(Self { http, api_key, options })
    }

    fn submit(&self, request: &ExtractionRequest) -> Result<SmartScraperResponse, GatewayError> {
        let body = SmartScraperRequest::from(request);
        let resp = self
            .http
            .post(self.options.smartscraper_url())
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(&body)
            .send()
            .map_err(|e| GatewayError::from_transport(e, self.options.timeout))?;
        self.read_envelope(resp)
    }

    fn status(&self, request_id: &str) -> Result<SmartScraperResponse, GatewayError> {
        let resp = self
            .http
            .get(self.options.status_url(request_id))
            .header(API_KEY_HEADER, self.api_key.expose())
            .send()
            .map_err(|e| GatewayError::from_transport(e, self.options.timeout))?;
        self.read_envelope(resp)
    }

    fn read_envelope(&self, resp: Response) -> Result<SmartScraperResponse, GatewayError> {
        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| GatewayError::from_transport(e, self.options.timeout))?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GatewayError::Auth { status: status.as_u16() });
        }
        if !status.is_success() {
            return Err(GatewayError::Upstream {
                status: Some(status.as_u16()),
                message: truncate(&text, MAX_ERROR_BODY),
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| GatewayError::MalformedResponse(format!("undecodable envelope: {e}")))
    }

    /// Wait for a queued job. Bounded by `max_polls`.
    fn poll(&self, request_id: &str) -> Result<RawResult, GatewayError> {
        for attempt in 1..=self.options.max_polls {
            thread::sleep(self.options.poll_interval);
            logd!("Gateway: poll {attempt}/{} request_id={request_id}", self.options.max_polls);
            match wire::interpret(self.status(request_id)?)? {
                JobState::Done(result) => return Ok(result),
                JobState::Pending(_) => continue,
            }
        }
        Err(GatewayError::Timeout(
            self.options.poll_interval * self.options.max_polls,
        ))
    }
}

impl Extract for ScrapeGraphClient {
    fn extract(&self, request: &ExtractionRequest) -> Result<RawResult, GatewayError> {
        logf!(
            "Gateway: POST smartscraper url={} schema={}",
            request.url(),
            request.output_schema().is_some()
        );
        match wire::interpret(self.submit(request)?)? {
            JobState::Done(result) => Ok(result),
            JobState::Pending(id) => {
                logd!("Gateway: queued request_id={id}");
                self.poll(&id)
            }
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    let t = text.trim();
    match t.char_indices().nth(max) {
        Some((cut, _)) => join!(&t[..cut], "…"),
        None => s!(t),
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("  short  ", 10), "short");
        assert_eq!(truncate("ééééé", 2), "éé…");
    }
}
