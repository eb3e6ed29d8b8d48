//! Session token issuance and verification

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Claims embedded in an admin session token
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// Always true for an issued token; anything else invalidates the
    /// session regardless of signature.
    #[serde(default)]
    pub admin: bool,
    /// Issued at (as UTC timestamp)
    pub iat: u64,
    /// Expiration time (as UTC timestamp)
    pub exp: u64,
}

/// Why a token failed verification.
///
/// Callers log the variant but must collapse it into a single generic
/// outcome at the client boundary, so the response does not become a
/// verification oracle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionRejection {
    #[error("malformed token")]
    Malformed,
    #[error("signature mismatch")]
    BadSignature,
    #[error("session expired")]
    Expired,
    #[error("not an admin session")]
    WrongClaim,
}

/// Sign a fresh admin session token valid for `ttl_days` from `now`.
///
/// CPU-bound only, no I/O. An empty secret is an error; `Config::validate`
/// makes that unreachable in a running server, but the contract holds here
/// on its own.
pub fn issue_token(secret: &str, ttl_days: u64, now: u64) -> anyhow::Result<String> {
    anyhow::ensure!(!secret.is_empty(), "session signing secret is empty");

    let claims = SessionClaims {
        admin: true,
        iat: now,
        exp: now + ttl_days * SECONDS_PER_DAY,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verify a session token against the secret and the caller-supplied time.
///
/// Pure function of `(secret, token, now)`; never panics on untrusted
/// input. The signature check runs first, then the admin claim, then
/// expiry. Expiry is compared against `now` here rather than trusting the
/// library's ambient wall clock, so a valid signature alone never implies
/// freshness.
pub fn verify_token(
    secret: &str,
    token: &str,
    now: u64,
) -> Result<SessionClaims, SessionRejection> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => SessionRejection::BadSignature,
        _ => SessionRejection::Malformed,
    })?;

    let claims = token_data.claims;

    if !claims.admin {
        return Err(SessionRejection::WrongClaim);
    }

    if now >= claims.exp {
        return Err(SessionRejection::Expired);
    }

    Ok(claims)
}
