//! HTTP transport seam.
//!
//! The engine builds [`RequestParts`] and hands them to an
//! [`HttpTransport`]; production uses [`ReqwestTransport`], tests can
//! substitute an in-memory one.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;
use zoomkit_core::{Method, TransportError};

/// A fully built request, ready for the wire.
#[derive(Debug, Clone)]
pub struct RequestParts {
    pub method: Method,
    pub url: Url,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

/// Status code and raw body of a response.
#[derive(Debug, Clone)]
pub struct ResponseParts {
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(
        &self,
        req: RequestParts,
        timeout: Duration,
    ) -> Result<ResponseParts, TransportError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        // Client creation should never fail in practice; if it does, a
        // clear panic beats deferring a broken client to the first call.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!("zoomkit-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| panic!("failed to create reqwest HTTP client: {e}"));
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        req: RequestParts,
        timeout: Duration,
    ) -> Result<ResponseParts, TransportError> {
        let mut rb = self
            .client
            .request(reqwest_method(req.method), req.url)
            .timeout(timeout);

        for (name, value) in req.headers {
            rb = rb.header(name, value);
        }
        if let Some(body) = req.body {
            rb = rb.body(body);
        }

        let resp = rb.send().await.map_err(map_reqwest_error)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(map_reqwest_error)?.to_vec();

        Ok(ResponseParts { status, body })
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        return TransportError::Timeout;
    }
    if e.is_connect() || e.is_request() {
        return TransportError::Network(e.to_string());
    }
    TransportError::Other(e.to_string())
}
