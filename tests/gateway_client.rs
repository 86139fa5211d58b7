// tests/gateway_client.rs
//
// ScrapeGraphClient against a local HTTP stub that serves canned responses,
// one per connection, and records the raw requests it saw.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde_json::json;

use gh_insights::s;

use gh_insights::config::options::{ApiKey, GatewayOptions};
use gh_insights::gateway::{Extract, ExtractionRequest, GatewayError, ScrapeGraphClient};

struct Stub {
    base_url: String,
    handle: JoinHandle<Vec<String>>,
}

impl Stub {
    fn serve(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let mut seen = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();
                seen.push(read_request(&mut stream));
                let reply = format!(
                    "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(reply.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
            seen
        });
        Self { base_url, handle }
    }

    /// Requests seen, in order.
    fn finish(self) -> Vec<String> {
        self.handle.join().unwrap()
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 2048];
    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let len = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn client(stub: &Stub, max_polls: u32) -> ScrapeGraphClient {
    let mut opts = GatewayOptions::default();
    opts.set_base_url(&stub.base_url).unwrap();
    opts.timeout = Duration::from_secs(5);
    opts.poll_interval = Duration::from_millis(5);
    opts.max_polls = max_polls;
    ScrapeGraphClient::new(ApiKey::parse("sgai-test").unwrap(), opts).unwrap()
}

fn request() -> ExtractionRequest {
    ExtractionRequest::new("https://github.com/topics", "list topics")
        .with_output_schema(json!({"type": "object"}))
}

#[test]
fn completed_job_returns_result() {
    let body = json!({"request_id": "r1", "status": "completed", "result": {"featured_topics": []}});
    let stub = Stub::serve(vec![(200, body.to_string())]);
    let out = client(&stub, 3).extract(&request()).unwrap();
    assert_eq!(out, json!({"featured_topics": []}));

    let seen = stub.finish();
    let req = &seen[0];
    assert!(req.starts_with("POST /v1/smartscraper "));
    assert!(req.to_ascii_lowercase().contains("sgai-apikey: sgai-test"));
    assert!(req.contains("\"website_url\":\"https://github.com/topics\""));
    assert!(req.contains("\"user_prompt\":\"list topics\""));
    assert!(req.contains("\"output_schema\""));
}

#[test]
fn rejected_key_is_auth_error() {
    for status in [401u16, 403] {
        let stub = Stub::serve(vec![(status, s!("{\"detail\":\"bad key\"}"))]);
        let err = client(&stub, 3).extract(&request()).unwrap_err();
        assert!(matches!(err, GatewayError::Auth { status: got } if got == status), "{err:?}");
        stub.finish();
    }
}

#[test]
fn server_error_keeps_a_truncated_body() {
    let stub = Stub::serve(vec![(500, "x".repeat(2000))]);
    let err = client(&stub, 3).extract(&request()).unwrap_err();
    match err {
        GatewayError::Upstream { status, message } => {
            assert_eq!(status, Some(500));
            assert_eq!(message.chars().count(), 501);
            assert!(message.ends_with('…'));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
    stub.finish();
}

#[test]
fn undecodable_envelope_is_malformed() {
    let stub = Stub::serve(vec![(200, s!("<html>not json</html>"))]);
    let err = client(&stub, 3).extract(&request()).unwrap_err();
    assert!(matches!(err, GatewayError::MalformedResponse(_)), "{err:?}");
    stub.finish();
}

#[test]
fn failed_job_is_upstream_error() {
    let body = json!({"request_id": "r1", "status": "failed", "error": "page blocked"});
    let stub = Stub::serve(vec![(200, body.to_string())]);
    let err = client(&stub, 3).extract(&request()).unwrap_err();
    assert_eq!(err.to_string(), "extraction service error: page blocked");
    stub.finish();
}

#[test]
fn queued_job_is_polled_until_done() {
    let stub = Stub::serve(vec![
        (200, json!({"request_id": "abc", "status": "queued"}).to_string()),
        (200, json!({"request_id": "abc", "status": "processing"}).to_string()),
        (200, json!({"request_id": "abc", "status": "completed", "result": [{"name": "rust"}]}).to_string()),
    ]);
    let out = client(&stub, 5).extract(&request()).unwrap();
    assert_eq!(out, json!([{"name": "rust"}]));

    let seen = stub.finish();
    assert_eq!(seen.len(), 3);
    assert!(seen[1].starts_with("GET /v1/smartscraper/abc "));
    assert!(seen[2].starts_with("GET /v1/smartscraper/abc "));
    assert!(seen[1].to_ascii_lowercase().contains("sgai-apikey: sgai-test"));
}

#[test]
fn polling_gives_up_after_max_polls() {
    let pending = json!({"request_id": "abc", "status": "processing"}).to_string();
    let stub = Stub::serve(vec![(200, pending.clone()), (200, pending.clone()), (200, pending)]);
    let err = client(&stub, 2).extract(&request()).unwrap_err();
    assert!(matches!(err, GatewayError::Timeout(_)), "{err:?}");
    assert_eq!(stub.finish().len(), 3);
}
