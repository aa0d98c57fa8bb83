//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

/// Start a mock provider on an ephemeral port, returning a fixed JSON body
/// for every request. Returns the bound address.
pub async fn start_mock_provider(body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let response_str = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a programmable mock provider with async support.
#[allow(dead_code)]
pub async fn start_programmable_provider<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            400 => "400 Bad Request",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}
