//! Authentication types and bearer-token expiry checks
//!
//! Starfish bearer tokens are compact JWTs; the only claim this client
//! inspects is `exp`, to decide whether a cached token is still usable.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Client credentials exchanged for a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

/// How the service authenticates: client credentials that are exchanged
/// for (and transparently refresh) a bearer token, or a caller-supplied
/// static token that is never refreshed.
#[derive(Debug, Clone)]
pub enum AuthMethod {
    Credentials(Credentials),
    Token(String),
}

impl AuthMethod {
    /// True when the service owns the token lifecycle
    pub fn is_credentials(&self) -> bool {
        matches!(self, AuthMethod::Credentials(_))
    }
}

/// Response body of `POST /tokens`
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
}

/// JWT payload claims this client cares about
#[derive(Debug, Deserialize)]
struct TokenClaims {
    /// Expiry, seconds since epoch
    exp: i64,
}

/// Decode the expiry instant from a compact JWT.
///
/// Reads the second `.`-separated segment as base64url JSON and converts
/// the numeric `exp` claim to an absolute instant. Any shape problem is a
/// token error, surfaced to the caller rather than treated as "expired".
pub fn decode_expiry(token: &str) -> Result<DateTime<Utc>> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| Error::Token("token has no payload segment".into()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| Error::Token(format!("token payload is not base64: {}", e)))?;

    let claims: TokenClaims = serde_json::from_slice(&bytes)
        .map_err(|e| Error::Token(format!("token payload is not a valid claim set: {}", e)))?;

    Utc.timestamp_opt(claims.exp, 0)
        .single()
        .ok_or_else(|| Error::Token(format!("token exp claim out of range: {}", claims.exp)))
}

/// Check a compact JWT against the current instant
pub fn token_has_expired(token: &str) -> Result<bool> {
    Ok(decode_expiry(token)? < Utc::now())
}
