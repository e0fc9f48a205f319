//! API credentials.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Environment variable holding the API key.
pub const KEY_VAR: &str = "ZOOM_KEY";
/// Environment variable holding the API secret.
pub const SECRET_VAR: &str = "ZOOM_SECRET";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
}

/// Key/secret pair supplied once at construction and immutable afterwards.
///
/// The secret is held in a [`SecretString`] so it is zeroized on drop and
/// never appears in `Debug` output; it leaves this type only at signing
/// time.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Credentials {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Read [`KEY_VAR`] / [`SECRET_VAR`] from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let key = std::env::var(KEY_VAR).map_err(|_| ConfigError::MissingVar(KEY_VAR))?;
        let secret = std::env::var(SECRET_VAR).map_err(|_| ConfigError::MissingVar(SECRET_VAR))?;
        Ok(Credentials::new(key, secret))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
