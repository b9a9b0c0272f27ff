//! 共享测试工具：一次性的本地 HTTP 应答器

#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A `{ "results": [...] }` body built from `(first, last, country)` triples
pub fn users_body(specs: &[(&str, &str, &str)]) -> String {
    let results: Vec<serde_json::Value> = specs
        .iter()
        .map(|(first, last, country)| {
            serde_json::json!({
                "gender": "female",
                "name": { "title": "Ms", "first": first, "last": last },
                "location": { "city": "Somewhere", "country": country },
                "picture": {
                    "large": "https://randomuser.me/api/portraits/women/1.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/women/1.jpg"
                }
            })
        })
        .collect();
    serde_json::json!({
        "results": results,
        "info": { "seed": "roster", "results": specs.len(), "page": 1, "version": "1.4" }
    })
    .to_string()
}

/// Serve exactly one HTTP response on a random local port.
///
/// Returns the base URL to request and a receiver yielding the request head
/// (request line and headers) the server saw.
pub async fn serve_once(status_line: &str, body: &str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
            if head.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let _ = tx.send(String::from_utf8_lossy(&head).into_owned());
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    (format!("http://{addr}/api/"), rx)
}

/// A local URL nothing listens on
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/api/")
}
