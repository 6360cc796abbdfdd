//! Response envelope classification for the ViteX API.
//!
//! Nearly every endpoint wraps its reply in a uniform envelope
//! `{code, data, msg}` where `code` 0 means success. Classification turns
//! that loosely-typed shape into exactly one of: data, message, or a
//! structured exchange error, so callers never have to guess which field
//! is populated.

use serde::Deserialize;

use crate::api::error::{ApiError, ApiResult};

/// Substring the exchange uses when an order was already terminated.
const ALREADY_CANCELED_MARKER: &str = "The order status has been terminated";

/// Normalized replacement message for already-terminated orders.
pub const ALREADY_CANCELED_MSG: &str = "Order already canceled";

/// The exchange's uniform response wrapper.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// 0 on success, nonzero error code otherwise
    #[serde(default)]
    pub code: i64,
    /// Payload, present on most successful replies
    #[serde(default)]
    pub data: Option<T>,
    /// Message, populated on errors and data-less successes
    #[serde(default)]
    pub msg: Option<String>,
}

/// A classified successful reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiData<T> {
    /// Success with a payload.
    Data(T),
    /// Success with only a message (e.g. the order test endpoint).
    Message(String),
}

impl<T> ApiData<T> {
    /// Extract the payload, treating a message-only success as an error.
    pub fn into_data(self) -> ApiResult<T> {
        match self {
            Self::Data(data) => Ok(data),
            Self::Message(msg) => Err(ApiError::Deserialize(format!(
                "expected data payload, got message `{msg}`"
            ))),
        }
    }

    /// The payload, if this is a data success.
    pub fn data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Message(_) => None,
        }
    }

    /// The message, if this is a message-only success.
    pub fn message(self) -> Option<String> {
        match self {
            Self::Data(_) => None,
            Self::Message(msg) => Some(msg),
        }
    }
}

impl<T> ApiEnvelope<T> {
    /// Classify the envelope.
    ///
    /// * `code == 0` with data present → [`ApiData::Data`]
    /// * `code == 0` with only a message → [`ApiData::Message`]
    /// * `code != 0` → [`ApiError::Exchange`], with "already terminated"
    ///   messages rewritten to [`ALREADY_CANCELED_MSG`]; all other error
    ///   text passes through verbatim
    pub fn classify(self) -> ApiResult<ApiData<T>> {
        if self.code == 0 {
            if let Some(data) = self.data {
                return Ok(ApiData::Data(data));
            }
            if let Some(msg) = self.msg.filter(|m| !m.is_empty()) {
                return Ok(ApiData::Message(msg));
            }
            return Err(ApiError::Deserialize(
                "success envelope with neither data nor msg".to_string(),
            ));
        }

        let msg = self.msg.unwrap_or_default();
        let msg = if msg.contains(ALREADY_CANCELED_MARKER) {
            ALREADY_CANCELED_MSG.to_string()
        } else {
            msg
        };
        Err(ApiError::Exchange {
            code: self.code,
            msg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(json: &str) -> ApiEnvelope<Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_success_with_data_returns_data() {
        let envelope = parse(r#"{"code":0,"data":{"orderId":"x"},"msg":"ok"}"#);
        let data = envelope.classify().unwrap().into_data().unwrap();
        assert_eq!(data, serde_json::json!({ "orderId": "x" }));
    }

    #[test]
    fn test_success_without_data_returns_message() {
        let envelope = parse(r#"{"code":0,"data":null,"msg":"success"}"#);
        let classified = envelope.classify().unwrap();
        assert_eq!(classified, ApiData::Message("success".to_string()));
        assert_eq!(classified.message(), Some("success".to_string()));
    }

    #[test]
    fn test_error_passes_through_verbatim() {
        let envelope = parse(r#"{"code":1001,"data":null,"msg":"invalid symbol"}"#);
        match envelope.classify() {
            Err(ApiError::Exchange { code, msg }) => {
                assert_eq!(code, 1001);
                assert_eq!(msg, "invalid symbol");
            }
            other => panic!("expected exchange error, got {other:?}"),
        }
    }

    #[test]
    fn test_already_terminated_message_is_rewritten() {
        let envelope =
            parse(r#"{"code":1,"data":null,"msg":"The order status has been terminated"}"#);
        match envelope.classify() {
            Err(ApiError::Exchange { code, msg }) => {
                assert_eq!(code, 1);
                assert_eq!(msg, ALREADY_CANCELED_MSG);
            }
            other => panic!("expected exchange error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_success_envelope_is_an_error() {
        let envelope = parse(r#"{"code":0,"data":null,"msg":null}"#);
        assert!(matches!(envelope.classify(), Err(ApiError::Deserialize(_))));
    }
}
