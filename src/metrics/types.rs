use crate::error::RequestError;

/// Byte count and status text recovered from a successful read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    pub response_bytes: u64,
    pub status_code: Option<String>,
}

/// Immutable result of one executed request.
///
/// `elapsed_micros` is present once both the send and the receive call ran,
/// even when the receive itself failed; resolution and connection failures
/// abort before the timer starts and carry no sample.
#[derive(Debug)]
pub struct RequestOutcome {
    pub elapsed_micros: Option<u64>,
    pub result: Result<ResponseSummary, RequestError>,
}

impl RequestOutcome {
    #[must_use]
    pub const fn aborted(error: RequestError) -> Self {
        Self {
            elapsed_micros: None,
            result: Err(error),
        }
    }

    #[must_use]
    pub const fn receive_error(elapsed_micros: u64, error: RequestError) -> Self {
        Self {
            elapsed_micros: Some(elapsed_micros),
            result: Err(error),
        }
    }

    #[must_use]
    pub fn success(elapsed_micros: u64, response: ResponseSummary) -> Self {
        Self {
            elapsed_micros: Some(elapsed_micros),
            result: Ok(response),
        }
    }
}
