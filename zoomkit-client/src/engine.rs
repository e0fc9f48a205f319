//! The request engine: build, sign, send, capture.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use serde_json::Value;
use tracing::debug;
use url::Url;
use zoomkit_core::request::{path, query};
use zoomkit_core::{CallError, RawOutcome, RequestSpec, StatusPolicy, TransportError};

use crate::auth;
use crate::config::Credentials;
use crate::transport::{HttpTransport, ReqwestTransport, RequestParts};

/// Production endpoint root.
pub const BASE_URL: &str = "https://api.zoom.us/v2";

/// Per-request timeout; the only bound on call duration.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One client per credential pair.
///
/// Carries no per-call state: every call builds a fresh spec, signs a
/// fresh token, and ends in a [`RawOutcome`] value, so a single client is
/// safe to share across concurrent tasks.
#[derive(Clone)]
pub struct ApiClient {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, BASE_URL)
    }

    /// Point the client at a different root (sandbox, mock server).
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        ApiClient {
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: REQUEST_TIMEOUT,
            transport: Arc::new(ReqwestTransport::default()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = transport;
        self
    }

    /// Execute a spec: substitute the path, sign a token, send, capture.
    ///
    /// Any missing path parameter rejects the call before the transport is
    /// touched: all missing names are reported together, never just the
    /// first. One outbound request otherwise; transport failures are
    /// captured, not retried.
    pub async fn execute(&self, spec: &RequestSpec) -> RawOutcome {
        let (resolved_path, missing) = path::substitute(&spec.path, &spec.path_params);
        if !missing.is_empty() {
            return RawOutcome::Rejected(missing);
        }

        let parts = match self.build_parts(spec, &resolved_path, SystemTime::now()) {
            Ok(parts) => parts,
            Err(err) => return RawOutcome::Transport(err),
        };

        debug!(method = spec.method.as_str(), url = %parts.url, "sending request");
        match self.transport.send(parts, self.timeout).await {
            Ok(resp) => {
                debug!(status = resp.status, "response received");
                // A body that is not valid JSON counts as no body.
                let body = serde_json::from_slice::<Value>(&resp.body).ok();
                RawOutcome::Completed {
                    status: resp.status,
                    body,
                }
            }
            Err(err) => RawOutcome::Transport(err),
        }
    }

    /// Execute and normalize in one step. Every endpoint method funnels
    /// through here with its category's [`StatusPolicy`].
    pub async fn call(
        &self,
        spec: RequestSpec,
        policy: &StatusPolicy,
    ) -> Result<Value, CallError> {
        let outcome = self.execute(&spec).await;
        policy.normalize(&outcome)
    }

    fn build_parts(
        &self,
        spec: &RequestSpec,
        resolved_path: &str,
        now: SystemTime,
    ) -> Result<RequestParts, TransportError> {
        let mut target = format!("{}{}", self.base_url, resolved_path);
        if let Some(qs) = query::encode(&spec.query) {
            target.push('?');
            target.push_str(&qs);
        }
        let url = Url::parse(&target)
            .map_err(|e| TransportError::Other(format!("invalid request URL {target}: {e}")))?;

        let token = auth::sign_token(&self.credentials, now)
            .map_err(|e| TransportError::Other(e.to_string()))?;

        let mut headers = BTreeMap::new();
        headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());

        let body = if spec.method.allows_body() {
            spec.body.encoded()
        } else {
            None
        };

        Ok(RequestParts {
            method: spec.method,
            url,
            headers,
            body,
        })
    }
}
