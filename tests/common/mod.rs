//! In-process HTTP stub used by the integration tests.
//!
//! Serves canned responses per path over plain HTTP/1.1 on `127.0.0.1` and
//! records every request it receives. One request per connection.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A canned response for one path.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(path: &str, body: impl Into<String>) -> Self {
        Self::with_status(path, 200, body)
    }

    pub fn with_status(path: &str, status: u16, body: impl Into<String>) -> Self {
        Self {
            path: path.trim_start_matches('/').to_owned(),
            status,
            body: body.into(),
        }
    }
}

/// A request as seen by the stub.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    /// Header names are lower-cased.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    /// Serve `routes`; unknown paths get a 404 with a plain-text body.
    pub async fn start(routes: Vec<Route>) -> Self {
        Self::spawn(Some(routes)).await
    }

    /// Accept connections but never answer.
    pub async fn silent() -> Self {
        Self::spawn(None).await
    }

    async fn spawn(routes: Option<Vec<Route>>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes = routes.map(Arc::new);

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((sock, _)) = listener.accept().await {
                let recorded = Arc::clone(&recorded);
                let routes = routes.clone();
                tokio::spawn(async move {
                    match routes {
                        Some(routes) => serve(sock, &routes, &recorded).await,
                        None => hold(sock).await,
                    }
                });
            }
        });

        Self { addr, requests }
    }

    /// Base URL of the stub, without a trailing slash.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Full URL of `path` on the stub.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.url(), path.trim_start_matches('/'))
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// The single request received for `path`.
    pub fn request_to(&self, path: &str) -> Recorded {
        let path = path.trim_start_matches('/');
        let matching: Vec<_> = self
            .requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect();
        assert_eq!(matching.len(), 1, "expected one request to {path}");
        matching.into_iter().next().unwrap()
    }
}

async fn hold(_sock: TcpStream) {
    tokio::time::sleep(Duration::from_secs(60)).await;
}

async fn serve(mut sock: TcpStream, routes: &[Route], recorded: &Mutex<Vec<Recorded>>) {
    let Some(request) = read_request(&mut sock).await else {
        return;
    };

    let (status, body) = routes
        .iter()
        .find(|r| r.path == request.path)
        .map(|r| (r.status, r.body.clone()))
        .unwrap_or((404, "not found".to_owned()));

    recorded.lock().expect("requests lock").push(request);

    let content_type = if body.trim_start().starts_with('{') {
        "application/json"
    } else {
        "text/plain"
    };
    let response = format!(
        "HTTP/1.1 {status} STUB\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = sock.write_all(response.as_bytes()).await;
    let _ = sock.shutdown().await;
}

async fn read_request(sock: &mut TcpStream) -> Option<Recorded> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = sock.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_owned();
    let target = request_line.next()?;
    let path = target
        .split('?')
        .next()
        .unwrap_or_default()
        .trim_start_matches('/')
        .to_owned();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_owned()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = sock.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let end = buf.len().min(header_end + content_length);
    let body = String::from_utf8_lossy(&buf[header_end..end]).into_owned();

    Some(Recorded {
        method,
        path,
        headers,
        body,
    })
}
