use std::net::SocketAddr;
use std::time::Instant;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, lookup_host};

use crate::error::RequestError;
use crate::metrics::{RequestOutcome, ResponseSummary};

use super::status::status_code;
use super::target::{Target, split_url};

/// Plain-TCP HTTP port; the tool never speaks TLS.
const HTTP_PORT: u16 = 80;
/// Capacity of the single response read.
pub const RESPONSE_BUFFER_SIZE: usize = 10_000;

/// Issues one HTTP/1.0 GET against `raw_url` and reports the outcome.
///
/// The raw response is printed to stdout; with `verbose` the connected peer
/// address is printed first. The round trip is timed from send to the
/// single receive, and the timing sample is kept even when the receive
/// fails. The socket is released on every exit path.
pub async fn execute(raw_url: &str, verbose: bool) -> RequestOutcome {
    let target = split_url(raw_url);

    // Authorities carrying an explicit port resolve as-is; bare hosts get
    // the fixed HTTP port.
    let endpoint = if target.host.contains(':') {
        target.host.clone()
    } else {
        format!("{}:{}", target.host, HTTP_PORT)
    };
    let candidates = match lookup_host(endpoint.as_str()).await {
        Ok(candidates) => candidates,
        Err(source) => {
            return RequestOutcome::aborted(RequestError::Resolve {
                host: target.host,
                port: HTTP_PORT,
                source,
            });
        }
    };

    let (mut stream, peer) = match connect_first(candidates).await {
        Ok(connection) => connection,
        Err(last_error) => {
            return RequestOutcome::aborted(RequestError::Connect {
                host: target.host,
                source: last_error,
            });
        }
    };

    if verbose {
        println!("Client connecting to {}", peer.ip());
        println!("======");
    }

    let payload = request_payload(&target);

    let started = Instant::now();
    // A failed send is not inspected; it surfaces on the read that follows.
    drop(stream.write_all(payload.as_bytes()).await);
    let mut buffer = [0_u8; RESPONSE_BUFFER_SIZE];
    let received = stream.read(&mut buffer).await;
    let elapsed = elapsed_micros(started);

    match received {
        Ok(received) => {
            let response = buffer.get(..received).unwrap_or_default();
            println!("{}", String::from_utf8_lossy(response));
            let summary = ResponseSummary {
                response_bytes: u64::try_from(received).unwrap_or(u64::MAX),
                status_code: status_code(response),
            };
            RequestOutcome::success(elapsed, summary)
        }
        Err(source) => RequestOutcome::receive_error(
            elapsed,
            RequestError::Receive {
                host: target.host,
                source,
            },
        ),
    }
}

/// Walks resolved candidates in order and connects to the first that
/// accepts; only the last failure is retained.
async fn connect_first<I>(candidates: I) -> Result<(TcpStream, SocketAddr), Option<std::io::Error>>
where
    I: Iterator<Item = SocketAddr>,
{
    let mut last_error = None;
    for candidate in candidates {
        match TcpStream::connect(candidate).await {
            Ok(stream) => return Ok((stream, candidate)),
            Err(error) => last_error = Some(error),
        }
    }
    Err(last_error)
}

/// Literal HTTP/1.0 GET template. The path is used exactly as split: an
/// empty path produces `GET  HTTP/1.0` with no slash at all, which is the
/// tool's established wire behavior.
pub(super) fn request_payload(target: &Target) -> String {
    format!(
        "GET {path} HTTP/1.0\r\nHost: {host}\r\nConnection: close\r\n\r\n",
        path = target.path,
        host = target.host,
    )
}

fn elapsed_micros(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX)
}
