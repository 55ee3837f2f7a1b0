//! Minimal HTTP/1.1 server serving a canned body for label lookup tests.
//!
//! Serves the same response to every request and records each request
//! target so tests can assert query construction.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

pub struct LabelServer {
    /// Endpoint URL to point the client at (e.g. "http://127.0.0.1:12345/w/api.php").
    pub endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl LabelServer {
    /// Request targets (path + query) seen so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread answering every request with
/// `status` and `body`. The server runs until the process exits.
pub fn start(status: u16, body: &str) -> LabelServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.to_string());
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, status, &body, &log));
        }
    });
    LabelServer {
        endpoint: format!("http://127.0.0.1:{port}/w/api.php"),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    status: u16,
    body: &str,
    log: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    // Request line: "GET /w/api.php?... HTTP/1.1"
    if let Some(target) = request.lines().next().and_then(|l| l.split(' ').nth(1)) {
        log.lock().unwrap().push(target.to_string());
    }
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
