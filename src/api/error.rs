//! API error types for the ViteX REST client.

use thiserror::Error;

use crate::orders::OrderError;

/// API-specific error type for the ViteX REST client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Classified exchange error envelope (`code != 0`)
    #[error("exchange error {code}: {msg}")]
    Exchange {
        /// The envelope's nonzero error code
        code: i64,
        /// The envelope's message, after normalization
        msg: String,
    },

    /// Response body didn't match the expected shape
    #[error("deserialization error: {0}")]
    Deserialize(String),

    /// Invalid parameter provided locally
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Signing produced an empty signature; submission suppressed
    #[error("request could not be signed; check API credentials")]
    Unsigned,

    /// Local order validation failure
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Non-success HTTP status with an unclassifiable body
    #[error("unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
