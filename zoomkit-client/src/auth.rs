//! Per-request bearer-token signing.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use thiserror::Error;

use crate::config::Credentials;

/// Tokens expire 60 seconds after issue. A token is derived fresh for
/// every request; pooling one across calls would outlive its expiry.
pub const TOKEN_TTL: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token signing failed: {0}")]
    Sign(#[from] jsonwebtoken::errors::Error),
}

#[derive(Debug, Serialize)]
struct Claims {
    iss: String,
    exp: u64,
}

/// Sign an HS256 token over `{iss: <key>, exp: now + 60s}`.
///
/// Deterministic for identical credentials and `now`; the only varying
/// input across calls is the clock.
pub fn sign_token(credentials: &Credentials, now: SystemTime) -> Result<String, AuthError> {
    let exp = now
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .saturating_add(TOKEN_TTL)
        .as_secs();
    let claims = Claims {
        iss: credentials.api_key().to_string(),
        exp,
    };
    let key = EncodingKey::from_secret(credentials.expose_secret().as_bytes());
    Ok(jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key)?)
}
