// src/gateway/error.rs
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("extraction timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("API key rejected (HTTP {status})")]
    Auth { status: u16 },

    #[error("extraction service error{}: {message}", status_suffix(.status))]
    Upstream { status: Option<u16>, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {code})"),
        None => s!(),
    }
}

impl GatewayError {
    /// Map a transport failure, folding reqwest's timeout into [`GatewayError::Timeout`].
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout(timeout)
        } else {
            GatewayError::Network(err)
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, GatewayError::Auth { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_read_well() {
        let e = GatewayError::Upstream { status: Some(502), message: s!("bad gateway") };
        assert_eq!(e.to_string(), "extraction service error (HTTP 502): bad gateway");

        let e = GatewayError::Upstream { status: None, message: s!("page blocked") };
        assert_eq!(e.to_string(), "extraction service error: page blocked");

        let e = GatewayError::Timeout(Duration::from_secs(120));
        assert_eq!(e.to_string(), "extraction timed out after 120s");
        assert!(GatewayError::Auth { status: 401 }.is_auth());
    }
}
