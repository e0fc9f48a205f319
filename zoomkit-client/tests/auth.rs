use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use zoomkit_client::auth::{sign_token, TOKEN_TTL};
use zoomkit_client::Credentials;

#[derive(Debug, Deserialize)]
struct Claims {
    iss: String,
    exp: u64,
}

fn at(epoch_secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(epoch_secs)
}

fn decode(token: &str, secret: &str) -> Claims {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.set_required_spec_claims::<&str>(&[]);
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .expect("token decodes with the signing secret")
    .claims
}

#[test]
fn token_is_three_unpadded_base64url_segments() {
    let credentials = Credentials::new("key", "secret");
    let token = sign_token(&credentials, at(1_700_000_000)).unwrap();
    assert_eq!(token.split('.').count(), 3);
    assert!(!token.contains('='));
    assert!(!token.contains('+'));
    assert!(!token.contains('/'));
}

#[test]
fn claims_carry_issuer_and_sixty_second_expiry() {
    let credentials = Credentials::new("my-api-key", "my-api-secret");
    let token = sign_token(&credentials, at(1_700_000_000)).unwrap();
    let claims = decode(&token, "my-api-secret");
    assert_eq!(claims.iss, "my-api-key");
    assert_eq!(claims.exp, 1_700_000_000 + TOKEN_TTL.as_secs());
}

#[test]
fn same_inputs_sign_the_same_token() {
    let credentials = Credentials::new("key", "secret");
    let a = sign_token(&credentials, at(1_700_000_000)).unwrap();
    let b = sign_token(&credentials, at(1_700_000_000)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn expiry_is_recomputed_not_carried_forward() {
    let credentials = Credentials::new("key", "secret");
    let t1 = 1_700_000_000;
    let t2 = t1 + 61;

    let token1 = sign_token(&credentials, at(t1)).unwrap();
    let token2 = sign_token(&credentials, at(t2)).unwrap();
    assert_ne!(token1, token2);

    // The first token is already expired by the time the second is signed.
    assert!(decode(&token1, "secret").exp < t2);
    assert_eq!(decode(&token2, "secret").exp, t2 + TOKEN_TTL.as_secs());
}

#[test]
fn signature_binds_the_secret() {
    let credentials = Credentials::new("key", "secret");
    let token = sign_token(&credentials, at(1_700_000_000)).unwrap();

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.set_required_spec_claims::<&str>(&[]);
    let err = jsonwebtoken::decode::<Claims>(
        &token,
        &DecodingKey::from_secret(b"wrong-secret"),
        &validation,
    )
    .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
}

#[test]
fn debug_output_redacts_the_secret() {
    let credentials = Credentials::new("key", "super-secret-value");
    let debug = format!("{credentials:?}");
    assert!(debug.contains("key"));
    assert!(!debug.contains("super-secret-value"));
}
