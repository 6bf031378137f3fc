use thiserror::Error;

/// Failure modes of a single request attempt.
///
/// All three are recovered locally: the run loop logs the error and moves
/// on to the next iteration.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to resolve {host}:{port} ({source})")]
    Resolve {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("No resolved address for {host} accepted the connection")]
    Connect {
        host: String,
        #[source]
        source: Option<std::io::Error>,
    },
    #[error("Failed to receive response from {host} ({source})")]
    Receive {
        host: String,
        #[source]
        source: std::io::Error,
    },
}
