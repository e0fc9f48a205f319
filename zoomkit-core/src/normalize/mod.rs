//! Status-code interpretation: `RawOutcome` → caller-facing result.

use serde_json::{json, Value};

use crate::error::CallError;
use crate::outcome::RawOutcome;

/// Accepted-status policy for one calling convention.
///
/// Two conventions exist in the vendor surface; they are kept distinct and
/// every endpoint group names the one it uses instead of the policy being
/// baked into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPolicy {
    accepted: &'static [u16],
    /// Statuses that synthesize a success value when the body is empty.
    sentinel: &'static [u16],
}

impl StatusPolicy {
    /// Success on 200/201/202/204. The vendor sends no body for most
    /// update/delete operations, so an empty 202/204 response synthesizes
    /// `{"status": 204, "message": "Action successful."}`.
    pub const fn broad() -> Self {
        StatusPolicy {
            accepted: &[200, 201, 202, 204],
            sentinel: &[202, 204],
        }
    }

    /// Success on 200 only; the parsed body is passed through as-is.
    pub const fn ok_only() -> Self {
        StatusPolicy {
            accepted: &[200],
            sentinel: &[],
        }
    }

    pub fn accepts(&self, status: u16) -> bool {
        self.accepted.contains(&status)
    }

    /// Interpret one outcome. Pure: the same outcome always normalizes to
    /// the same result.
    pub fn normalize(&self, outcome: &RawOutcome) -> Result<Value, CallError> {
        match outcome {
            RawOutcome::Rejected(missing) => Err(CallError::Preflight(missing.clone())),
            RawOutcome::Transport(err) => Err(CallError::Transport(err.clone())),
            RawOutcome::Completed { status, body } => {
                if !self.accepts(*status) {
                    return Err(CallError::Api {
                        message: vendor_message(body.as_ref()),
                        status: *status,
                    });
                }
                match body {
                    Some(body) if !is_empty_body(body) => Ok(body.clone()),
                    _ if self.sentinel.contains(status) => Ok(json!({
                        "status": 204,
                        "message": "Action successful.",
                    })),
                    _ => Ok(Value::Null),
                }
            }
        }
    }
}

/// The vendor puts a human-readable `message` field in error bodies.
fn vendor_message(body: Option<&Value>) -> String {
    body.and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn is_empty_body(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        _ => false,
    }
}
