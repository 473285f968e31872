//! Shared helpers for integration tests: a fixture catalog and a fake
//! chat completions endpoint on 127.0.0.1.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parfum::config::ConsultantConfig;

pub const FIXTURE: &str = include_str!("../fixtures/parfums.json");

/// Copy the fixture catalog into a fresh temp dir
pub fn fixture_catalog() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("parfums.json");
    std::fs::write(&path, FIXTURE).expect("write fixture");
    (dir, path)
}

/// A request the fake service received
#[derive(Debug, Clone)]
pub struct Captured {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: serde_json::Value,
}

impl Captured {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub struct FakeService {
    pub addr: SocketAddr,
    handle: JoinHandle<Vec<Captured>>,
}

impl FakeService {
    pub fn url(&self) -> String {
        format!("http://{}/chat/completions", self.addr)
    }

    pub fn config(&self) -> ConsultantConfig {
        ConsultantConfig {
            api_key: Some("sk-test".to_string()),
            api_url: self.url(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Wait for the scripted exchanges to finish and return what was received
    pub fn finish(self) -> Vec<Captured> {
        self.handle.join().expect("fake service thread")
    }
}

/// Serve one canned reply per scripted (status, body) pair, in order
pub fn serve(replies: Vec<(u16, String)>) -> FakeService {
    serve_with_delay(replies, Duration::ZERO)
}

/// Like [`serve`], but sleep before each reply
pub fn serve_with_delay(replies: Vec<(u16, String)>, delay: Duration) -> FakeService {
    let raw = replies
        .into_iter()
        .map(|(status, body)| format_response(status, &body))
        .collect();
    spawn(raw, delay)
}

/// Write each reply verbatim, including malformed framing
pub fn serve_raw(replies: Vec<String>) -> FakeService {
    spawn(replies, Duration::ZERO)
}

fn spawn(replies: Vec<String>, delay: Duration) -> FakeService {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake service");
    let addr = listener.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        let mut captured = Vec::new();
        for reply in replies {
            let (mut stream, _) = listener.accept().expect("accept");
            captured.push(read_request(&mut stream));
            thread::sleep(delay);
            let _ = stream
                .write_all(reply.as_bytes())
                .and_then(|_| stream.flush());
        }
        captured
    });

    FakeService { addr, handle }
}

/// An address nothing listens on
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/chat/completions", addr)
}

pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "cmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

fn read_request(stream: &mut TcpStream) -> Captured {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("read timeout");

    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).expect("read request");
        assert!(n > 0, "client closed before sending headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n").filter(|l| !l.is_empty());
    let request_line = lines.next().unwrap_or_default().to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).expect("read body");
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    Captured {
        request_line,
        headers,
        body,
    }
}

fn format_response(status: u16, body: &str) -> String {
    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    )
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
