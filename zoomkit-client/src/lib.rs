#![forbid(unsafe_code)]

//! Zoom v2 REST API client.
//!
//! [`ApiClient`] owns the credentials and the transport: it signs a fresh
//! bearer token per request, substitutes path templates, and normalizes
//! vendor status codes. The per-category API surface lives in
//! [`endpoints`]; every method there is a thin data-shaping layer over
//! [`ApiClient::call`].

pub mod auth;
pub mod config;
pub mod endpoints;
pub mod engine;
pub mod transport;

pub use crate::config::{ConfigError, Credentials};
pub use crate::engine::{ApiClient, BASE_URL, REQUEST_TIMEOUT};
pub use zoomkit_core::{
    Body, CallError, Method, RawOutcome, RequestSpec, StatusPolicy, TransportError,
};
