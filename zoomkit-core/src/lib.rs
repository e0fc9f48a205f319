#![forbid(unsafe_code)]

//! Request model and response normalization for the Zoom v2 API.
//!
//! This crate is pure data and logic; the HTTP transport and token signing
//! live in `zoomkit-client`.

pub mod error;
pub mod normalize;
pub mod outcome;
pub mod request;

pub use crate::error::{CallError, MissingPathParam};
pub use crate::normalize::StatusPolicy;
pub use crate::outcome::{RawOutcome, TransportError};
pub use crate::request::{Body, Method, RequestSpec};
