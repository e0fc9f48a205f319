use thiserror::Error;

use crate::outcome::TransportError;

/// A `{name}` placeholder in a path template with no matching parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Required path parameter was not specified: {0}")]
pub struct MissingPathParam(pub String);

/// Caller-facing failure for one API call.
///
/// Every failure kind is surfaced immediately; nothing is retried or
/// recovered internally. Retry policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// Path substitution failed; no network request was made.
    #[error("Errors: {}", join_errors(.0))]
    Preflight(Vec<MissingPathParam>),

    /// An endpoint method rejected its arguments before building a request.
    #[error("{0}")]
    InvalidArgument(String),

    /// The request was sent but no HTTP status came back.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The vendor answered with a status outside the accepted set.
    /// `message` is the vendor-supplied `message` body field, or empty.
    #[error("{message} (Status Code {status})")]
    Api { message: String, status: u16 },
}

impl CallError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        CallError::InvalidArgument(msg.into())
    }

    /// The HTTP status carried by this error, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            CallError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn join_errors(errors: &[MissingPathParam]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
