//! Signed trading operations: place, test, and cancel orders.
//!
//! [`VitexTradingClient`] wraps the public [`VitexApiClient`] with account
//! credentials and drives the full submission pipeline for every
//! operation: resolve the pair's precision, quantize price/amount, attach
//! the authentication fields, sign, transmit, classify the reply and
//! translate the exchange's numeric status into a readable order state.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitex_sdk::api::VitexApiClient;
//! use vitex_sdk::auth::Credentials;
//! use vitex_sdk::network::DEFAULT_API_URL;
//! use vitex_sdk::orders::Order;
//! use vitex_sdk::trading::VitexTradingClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = VitexApiClient::new(DEFAULT_API_URL)?;
//!     let client = VitexTradingClient::new(api, Credentials::new("key", "secret"));
//!
//!     let order = Order::parse("EPIC-002_BTC-000", "sell", "5", "0.00006")?;
//!     // Validate credentials and parameters without executing anything
//!     let order = client.test_order(order).await?;
//!     println!("{:?}", order.state());
//!
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Method;
use serde_json::{json, Value};

use crate::api::envelope::{ApiData, ApiEnvelope};
use crate::api::error::{ApiError, ApiResult};
use crate::api::types::CancelledOrder;
use crate::api::VitexApiClient;
use crate::auth::{sign_params, Credentials, SignedParams};
use crate::orders::{
    HistoryOrder, Order, OrderError, OrderState, OrderStatus, SubmitMode, TradingPair,
};
use crate::precision::normalize_params;

/// Delay before the single server-time fetch reattempt.
const TIME_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Order placement endpoint (POST to place, DELETE to cancel one order).
const ORDER_PATH: &str = "/api/v2/order";

/// Test placement endpoint: validates but never executes.
const ORDER_TEST_PATH: &str = "/api/v2/order/test";

/// Bulk endpoint (DELETE cancels every open order on a pair).
const ORDERS_PATH: &str = "/api/v2/orders";

/// Authenticated trading client for the ViteX API.
#[derive(Debug, Clone)]
pub struct VitexTradingClient {
    api: VitexApiClient,
    credentials: Credentials,
}

impl VitexTradingClient {
    /// Wrap a public client with account credentials.
    pub fn new(api: VitexApiClient, credentials: Credentials) -> Self {
        Self { api, credentials }
    }

    /// The underlying public client.
    pub fn api(&self) -> &VitexApiClient {
        &self.api
    }

    // =========================================================================
    // Order preparation
    // =========================================================================

    /// Validate an order and quantize it to its pair's declared precision.
    ///
    /// Precision resolution is best-effort: a failed metadata lookup falls
    /// back to 8 decimal places and never blocks progression. The returned
    /// order is in the `Normalized` state, ready for submission.
    pub async fn prepare_order(&self, order: Order) -> Order {
        let precision = self.api.pair_precision(order.pair().symbol()).await;
        order.normalized(precision)
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Place a live order.
    ///
    /// Runs the full pipeline and returns the order in a terminal state:
    /// `Acknowledged` with the translated exchange status, or `Rejected`
    /// with the refusal reason. Transport failures propagate as errors.
    pub async fn place_order(&self, order: Order) -> ApiResult<Order> {
        self.submit_order(order, SubmitMode::Live).await
    }

    /// Submit an order to the test endpoint.
    ///
    /// Exercises the same normalize/sign pipeline and returns the same
    /// classified shape as a live placement, but the exchange only
    /// validates; nothing executes and no order is created.
    pub async fn test_order(&self, order: Order) -> ApiResult<Order> {
        self.submit_order(order, SubmitMode::Test).await
    }

    async fn submit_order(&self, order: Order, mode: SubmitMode) -> ApiResult<Order> {
        // Normalize unless the caller already did.
        let order = match order.state() {
            OrderState::Normalized { .. } => order,
            _ => self.prepare_order(order).await,
        };
        let precision = match order.state() {
            OrderState::Normalized { precision } => *precision,
            _ => unreachable!("order was just normalized"),
        };

        let mut params = order.to_params();
        normalize_params(&mut params, &precision);

        let signed = self.signed_params(params).await?;
        if !signed.is_signed() {
            return Ok(order.rejected("unsigned", None));
        }
        let order = order.signed(signed.clone());

        let path = match mode {
            SubmitMode::Test => ORDER_TEST_PATH,
            SubmitMode::Live => ORDER_PATH,
        };
        let order = order.submitted(mode);

        match self.send_signed(Method::POST, path, &signed).await? {
            Outcome::Success(reply) => Ok(self.classify_placement(order, mode, reply)),
            Outcome::Exchange { code, msg } => {
                let reason = msg_or_code(code, &msg);
                let envelope = json!({ "code": code, "data": null, "msg": msg });
                Ok(order.rejected(reason, Some(envelope)))
            }
        }
    }

    fn classify_placement(&self, order: Order, mode: SubmitMode, reply: ApiData<Value>) -> Order {
        if mode == SubmitMode::Test {
            let response = match reply {
                ApiData::Data(data) => data,
                ApiData::Message(msg) => Value::String(msg),
            };
            return order.test_validated(response);
        }

        match reply {
            ApiData::Data(data) => match data.get("status").and_then(Value::as_i64) {
                Some(code) => match OrderStatus::from_code(code) {
                    Ok(status) => order.acknowledged(status, data),
                    Err(_) => order.rejected(format!("unknown status code {code}"), Some(data)),
                },
                None => order.rejected("order response missing status", Some(data)),
            },
            ApiData::Message(msg) => {
                let reason = format!("unexpected success message: {msg}");
                order.rejected(reason, Some(Value::String(msg)))
            }
        }
    }

    // =========================================================================
    // Cancellation
    // =========================================================================

    /// Cancel a previously placed order.
    ///
    /// The order must carry the exchange's order id (i.e. it was
    /// acknowledged, or its detail was fetched). Returns the order in the
    /// `Cancelled` or `CancelFailed` state.
    pub async fn cancel_order(&self, order: Order) -> ApiResult<Order> {
        let Some(order_id) = order.order_id().map(str::to_string) else {
            return Err(OrderError::MissingField("orderId").into());
        };

        let params = BTreeMap::from([
            ("symbol".to_string(), order.pair().symbol().to_string()),
            ("orderId".to_string(), order_id),
        ]);
        let signed = self.signed_params(params).await?;
        if !signed.is_signed() {
            return Ok(order.cancel_failed("unsigned", None));
        }

        let order = order.cancel_requested();
        match self.send_signed(Method::DELETE, ORDER_PATH, &signed).await? {
            Outcome::Success(reply) => {
                let response = match reply {
                    ApiData::Data(data) => data,
                    ApiData::Message(msg) => Value::String(msg),
                };
                Ok(order.cancelled(response))
            }
            Outcome::Exchange { code, msg } => {
                let reason = msg_or_code(code, &msg);
                let envelope = json!({ "code": code, "data": null, "msg": msg });
                Ok(order.cancel_failed(reason, Some(envelope)))
            }
        }
    }

    /// Cancel an order by its exchange id, without a full [`Order`] in hand.
    ///
    /// Returns a [`HistoryOrder`] projection carrying the classified reply.
    pub async fn cancel_order_by_id(
        &self,
        pair: TradingPair,
        order_id: &str,
    ) -> ApiResult<HistoryOrder> {
        let mut order = HistoryOrder::new(pair, json!({ "orderId": order_id }));

        let params = BTreeMap::from([
            ("symbol".to_string(), order.pair.symbol().to_string()),
            ("orderId".to_string(), order_id.to_string()),
        ]);
        let signed = self.signed_params(params).await?;
        if !signed.is_signed() {
            return Err(ApiError::Unsigned);
        }

        match self.send_signed(Method::DELETE, ORDER_PATH, &signed).await? {
            Outcome::Success(reply) => {
                order.network_response = Some(match reply {
                    ApiData::Data(data) => data,
                    ApiData::Message(msg) => Value::String(msg),
                });
                Ok(order)
            }
            Outcome::Exchange { code, msg } => Err(ApiError::Exchange { code, msg }),
        }
    }

    /// Cancel every open order on a pair.
    ///
    /// Returns the cancelled set as [`HistoryOrder`] projections with the
    /// numeric status translated to its readable label.
    pub async fn cancel_all_orders(&self, pair: &TradingPair) -> ApiResult<Vec<HistoryOrder>> {
        let params = BTreeMap::from([("symbol".to_string(), pair.symbol().to_string())]);
        let signed = self.signed_params(params).await?;
        if !signed.is_signed() {
            return Err(ApiError::Unsigned);
        }

        let cancelled: Vec<CancelledOrder> =
            match self.send_signed(Method::DELETE, ORDERS_PATH, &signed).await? {
                Outcome::Success(ApiData::Data(data)) => serde_json::from_value(data)
                    .map_err(|e| ApiError::Deserialize(format!("cancel-all response: {e}")))?,
                Outcome::Success(ApiData::Message(_)) => Vec::new(),
                Outcome::Exchange { code, msg } => return Err(ApiError::Exchange { code, msg }),
            };

        let mut orders = Vec::with_capacity(cancelled.len());
        for row in cancelled {
            let status = OrderStatus::from_code(row.status)?;
            let pair = TradingPair::new(&row.symbol)?;
            let mut meta = serde_json::to_value(&row)
                .map_err(|e| ApiError::Deserialize(e.to_string()))?;
            meta["status"] = Value::String(status.label().to_string());
            orders.push(HistoryOrder::new(pair, meta));
        }
        Ok(orders)
    }

    // =========================================================================
    // Signing and transmission
    // =========================================================================

    /// Fetch the exchange's server time, retrying exactly once after a
    /// fixed delay. A second failure propagates.
    async fn server_timestamp(&self) -> ApiResult<i64> {
        match self.api.get_server_time().await {
            Ok(timestamp) => Ok(timestamp),
            Err(err) => {
                tracing::debug!(error = %err, "server time fetch failed, retrying once");
                tokio::time::sleep(TIME_RETRY_DELAY).await;
                self.api.get_server_time().await
            }
        }
    }

    /// Attach a fresh server timestamp and the account key, then sign.
    async fn signed_params(&self, params: BTreeMap<String, String>) -> ApiResult<SignedParams> {
        let timestamp = self.server_timestamp().await?;
        Ok(sign_params(&self.credentials, timestamp, params))
    }

    /// Transmit a signed parameter set and classify the reply envelope.
    ///
    /// The body is the exact signed string; re-encoding could diverge from
    /// the signature.
    async fn send_signed(
        &self,
        method: Method,
        path: &str,
        signed: &SignedParams,
    ) -> ApiResult<Outcome> {
        let url = format!("{}{}", self.api.base_url(), path);
        let response = self
            .api
            .http()
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(signed.to_body())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if self.api.verbose() {
            tracing::debug!(%url, body = %body, "raw API response");
        }

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus(status.as_u16(), body));
        }

        let envelope: ApiEnvelope<Value> = serde_json::from_str(&body)
            .map_err(|e| ApiError::Deserialize(format!("{} (from {})", e, path)))?;
        match envelope.classify() {
            Ok(reply) => Ok(Outcome::Success(reply)),
            Err(ApiError::Exchange { code, msg }) => Ok(Outcome::Exchange { code, msg }),
            Err(other) => Err(other),
        }
    }
}

/// Classified reply of a signed call: success payload or structured
/// exchange refusal. Transport and shape errors are not represented here;
/// they propagate.
enum Outcome {
    Success(ApiData<Value>),
    Exchange { code: i64, msg: String },
}

fn msg_or_code(code: i64, msg: &str) -> String {
    if msg.is_empty() {
        format!("exchange error {code}")
    } else {
        msg.to_string()
    }
}
