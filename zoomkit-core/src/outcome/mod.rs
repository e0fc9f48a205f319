use serde_json::Value;
use thiserror::Error;

use crate::error::MissingPathParam;

/// Transport-level failure: the request produced no HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("timeout")]
    Timeout,
    #[error("connect/dns/tls error: {0}")]
    Network(String),
    #[error("http error: {0}")]
    Other(String),
}

/// What came back from executing one `RequestSpec`.
///
/// Returned as a plain value from `execute`; no call state outlives it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawOutcome {
    /// Path substitution failed; the request was never sent.
    Rejected(Vec<MissingPathParam>),
    /// The request went out but no status came back.
    Transport(TransportError),
    /// The vendor answered. `body` is `None` when the response body was
    /// empty or not valid JSON.
    Completed { status: u16, body: Option<Value> },
}

impl RawOutcome {
    pub fn completed(status: u16, body: Option<Value>) -> Self {
        RawOutcome::Completed { status, body }
    }
}
