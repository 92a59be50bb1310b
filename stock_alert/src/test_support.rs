//! One-shot HTTP stub used to exercise the outbound clients against a local socket.
//!
//! The stub accepts a single connection, reads one request (head plus a
//! `Content-Length` body), answers with a canned response and hands the captured
//! request back over a channel.
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, bounded};
use reqwest::blocking::Client;

/// Request as seen by the stub.
pub struct CapturedRequest {
    /// Request line and headers, without the blank line.
    pub head: String,
    pub body: String,
}

impl CapturedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim().eq_ignore_ascii_case(name).then(|| value.trim())
        })
    }
}

pub struct StubServer {
    addr: SocketAddr,
    requests: Receiver<CapturedRequest>,
}

impl StubServer {
    /// Serve one request with `status` (e.g. `"200 OK"`) and a JSON `body`.
    pub fn respond_once(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        let (tx, rx) = bounded(1);
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let request = read_request(&mut stream);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
            if let Some(request) = request {
                let _ = tx.send(request);
            }
        });

        Self { addr, requests: rx }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// The captured request; panics if none arrived within five seconds.
    pub fn request(&self) -> CapturedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("stub server received no request")
    }
}

/// URL of a local port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe socket");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}/unreachable", addr)
}

/// Client that ignores proxy environment variables.
pub fn test_client() -> Client {
    Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("build test client")
}

fn read_request(stream: &mut TcpStream) -> Option<CapturedRequest> {
    stream.set_read_timeout(Some(Duration::from_secs(5))).ok()?;
    let mut raw = Vec::new();
    let mut buf = [0u8; 1024];

    let head_end = loop {
        if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        let size = stream.read(&mut buf).ok()?;
        if size == 0 {
            return None;
        }
        raw.extend_from_slice(&buf[..size]);
    };

    let mut request = CapturedRequest {
        head: String::from_utf8_lossy(&raw[..head_end]).into_owned(),
        body: String::new(),
    };
    let content_length = request
        .header("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = raw[head_end + 4..].to_vec();
    while body.len() < content_length {
        let size = stream.read(&mut buf).ok()?;
        if size == 0 {
            break;
        }
        body.extend_from_slice(&buf[..size]);
    }
    request.body = String::from_utf8_lossy(&body).into_owned();
    Some(request)
}
