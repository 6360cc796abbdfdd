//! Request signing for private ViteX API endpoints.
//!
//! Every private endpoint call carries three authentication fields in
//! addition to its own parameters: `key` (the account's API key),
//! `timestamp` (the exchange's server time in milliseconds) and
//! `signature` (an HMAC-SHA256 digest of the request string).
//!
//! # Signing Protocol
//!
//! 1. Merge `key` and `timestamp` into the request parameters
//! 2. Order all parameters alphabetically by key
//! 3. Concatenate them as `k1=v1&k2=v2…` with standard percent-encoding
//! 4. Sign the request string with HMAC-SHA256, using the API secret as key
//! 5. Attach the lowercase hex digest as the `signature` field
//!
//! The signed string and the transmitted request body are the same bytes;
//! [`SignedParams::to_body`] renders the exact payload sent on the wire.

use std::collections::BTreeMap;

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// API key pair for a ViteX account.
///
/// Both values are case sensitive. The secret is redacted from `Debug`
/// output.
#[derive(Clone)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"***")
            .finish()
    }
}

impl Credentials {
    /// Create credentials from an API key and secret.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// The API key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Sign a request string with HMAC-SHA256, returning the lowercase hex
    /// digest.
    ///
    /// Returns an empty string when the secret is absent or unusable.
    /// Callers must treat an empty signature as "unauthenticated, do not
    /// submit".
    pub fn sign(&self, payload: &str) -> String {
        if self.secret.is_empty() {
            return String::new();
        }
        let mut mac = match HmacSha256::new_from_slice(self.secret.as_bytes()) {
            Ok(mac) => mac,
            Err(_) => return String::new(),
        };
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

/// Render a parameter map as a percent-encoded query string in canonical
/// (ascending byte) key order.
///
/// `BTreeMap` iteration already yields keys in strict lexicographic order,
/// so the rendering is deterministic and idempotent. An empty map renders
/// as an empty string.
pub fn canonical_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// A fully signed parameter set, ready for transmission.
///
/// Holds the canonical parameters (auth fields included) and the signature
/// computed over their encoded form. No further mutation is permitted:
/// [`to_body`](Self::to_body) is the exact payload sent to the exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedParams {
    params: BTreeMap<String, String>,
    signature: String,
}

impl SignedParams {
    /// The canonical parameters the signature covers.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// The hex signature, empty when signing was not possible.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Whether a usable signature is attached.
    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }

    /// Render the transmitted request body: the canonical query string with
    /// the `signature` field appended last.
    pub fn to_body(&self) -> String {
        let query = canonical_query(&self.params);
        if query.is_empty() {
            format!("signature={}", self.signature)
        } else {
            format!("{}&signature={}", query, self.signature)
        }
    }
}

/// Attach the authentication fields to a parameter set and sign it.
///
/// `key` and `timestamp` are inserted after the caller's parameters, so a
/// caller-supplied value under either name is discarded in favor of the
/// auth field.
pub fn sign_params(
    credentials: &Credentials,
    timestamp_ms: i64,
    params: BTreeMap<String, String>,
) -> SignedParams {
    let mut merged = params;
    merged.insert("key".to_string(), credentials.key().to_string());
    merged.insert("timestamp".to_string(), timestamp_ms.to_string());

    let signature = credentials.sign(&canonical_query(&merged));
    SignedParams {
        params: merged,
        signature,
    }
}
