//! A minimal HTTP responder for exercising `HttpFetcher` without network
//! access.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const MAX_REQUEST_HEAD: usize = 16 * 1024;

/// Builds a complete HTTP/1.1 response.
#[must_use]
pub fn http_response(status: u16, reason: &str, content_type: Option<&str>, body: &[u8]) -> Vec<u8> {
    let mut head = format!("HTTP/1.1 {status} {reason}\r\nContent-Length: {}\r\nConnection: close\r\n", body.len());
    if let Some(content_type) = content_type {
        head.push_str("Content-Type: ");
        head.push_str(content_type);
        head.push_str("\r\n");
    }
    head.push_str("\r\n");

    let mut response = head.into_bytes();
    response.extend_from_slice(body);
    response
}

/// Accepts one connection on a loopback port, answers it with `response`
/// and returns the base URL (`http://127.0.0.1:<port>`).
///
/// ## Errors
/// Returns an error if the listener cannot be bound.
pub async fn serve_once(response: Vec<u8>) -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return;
        };
        if let Err(error) = respond(&mut stream, &response).await {
            tracing::debug!(%error, "Test responder failed");
        }
    });

    Ok(format!("http://{addr}"))
}

/// Accepts one connection and never answers it.
///
/// ## Errors
/// Returns an error if the listener cannot be bound.
pub async fn serve_silent(hold: Duration) -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Ok((stream, _)) = listener.accept().await {
            tokio::time::sleep(hold).await;
            drop(stream);
        }
    });

    Ok(format!("http://{addr}"))
}

async fn respond(stream: &mut TcpStream, response: &[u8]) -> std::io::Result<()> {
    let mut head = Vec::new();
    let mut buf = [0_u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") && head.len() < MAX_REQUEST_HEAD {
        let read = stream.read(&mut buf).await?;
        if read == 0 {
            break;
        }
        head.extend_from_slice(&buf[..read]);
    }

    stream.write_all(response).await?;
    stream.shutdown().await
}
