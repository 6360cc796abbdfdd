//! Domain model for ViteX orders.
//!
//! [`Order`] represents trading intent. All caller input is validated at
//! construction: malformed pair symbols, unparseable sides and
//! non-positive prices or amounts are rejected before any network call is
//! attempted. After construction the order moves through an explicit state
//! machine:
//!
//! ```text
//! Prepared → Normalized → Signed → Submitted{Test|Live}
//!          → TestValidated | Acknowledged(status) | Rejected(reason)
//!          | CancelRequested → Cancelled | CancelFailed(reason)
//! ```
//!
//! State transitions and the `network_response` field are written only by
//! the trading client; the transition methods are `pub(crate)`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::api::types::MarketPairInfo;
use crate::auth::SignedParams;
use crate::precision::PairPrecision;

/// Separator between the base and quote symbols of a pair symbol.
pub const PAIR_SEPARATOR: char = '_';

/// Local validation errors, raised before any network I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Pair symbol is not of the form `BASE-XXX_QUOTE-XXX`.
    #[error("invalid trading pair symbol `{0}` (expected `BASE-XXX_QUOTE-XXX`)")]
    InvalidPair(String),

    /// Side input matched none of the accepted forms.
    #[error("cannot parse `{0}` as an order side")]
    InvalidSide(String),

    /// Price or amount did not parse as a decimal number.
    #[error("order {field} `{input}` is not a number")]
    NotNumeric {
        /// Field name (`price` or `amount`).
        field: &'static str,
        /// The rejected input.
        input: String,
    },

    /// Price or amount was zero or negative.
    #[error("order {field} must be greater than zero, got {value}")]
    NotPositive {
        /// Field name (`price` or `amount`).
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },

    /// A field required for submission is absent.
    #[error("missing required order field `{0}`")]
    MissingField(&'static str),

    /// Exchange status code outside the known 0–10 table.
    #[error("unknown order status code {0}")]
    UnknownStatusCode(i64),
}

// ============================================================================
// Side
// ============================================================================

/// Order side. Serializes as the exchange's numeric code (0=buy, 1=sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum Side {
    /// Buy the trade token with the quote token.
    Buy = 0,
    /// Sell the trade token for the quote token.
    Sell = 1,
}

impl Side {
    /// The numeric wire code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The human-readable label (`"buy"` / `"sell"`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Side {
    type Err = OrderError;

    /// Accepts `buy`/`sell` in any case, or the numeric codes `0`/`1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("buy") || trimmed == "0" {
            Ok(Self::Buy)
        } else if trimmed.eq_ignore_ascii_case("sell") || trimmed == "1" {
            Ok(Self::Sell)
        } else {
            Err(OrderError::InvalidSide(s.to_string()))
        }
    }
}

impl From<i64> for Side {
    /// Zero is a buy; any nonzero code is coerced to sell.
    fn from(code: i64) -> Self {
        if code == 0 {
            Self::Buy
        } else {
            Self::Sell
        }
    }
}

impl From<f64> for Side {
    fn from(code: f64) -> Self {
        if code == 0.0 {
            Self::Buy
        } else {
            Self::Sell
        }
    }
}

impl From<bool> for Side {
    /// `true` is a sell, matching the numeric coercion.
    fn from(sell: bool) -> Self {
        if sell {
            Self::Sell
        } else {
            Self::Buy
        }
    }
}

impl From<Side> for u8 {
    fn from(side: Side) -> Self {
        side.code()
    }
}

// ============================================================================
// Order status
// ============================================================================

/// Human-readable translation of the exchange's numeric order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// 0, no definite status reported.
    Unknown,
    /// 1, request created, not yet received.
    PendingRequest,
    /// 2, received by the matching engine.
    Received,
    /// 3, resting on the book.
    Open,
    /// 4, completely filled.
    Filled,
    /// 5, partially filled, remainder on the book.
    PartiallyFilled,
    /// 6, cancel requested, not yet confirmed.
    PendingCancel,
    /// 7, cancelled.
    Cancelled,
    /// 8, partially filled, remainder cancelled.
    PartiallyCancelled,
    /// 9, failed.
    Failed,
    /// 10, expired.
    Expired,
}

const ORDER_STATES: [OrderStatus; 11] = [
    OrderStatus::Unknown,
    OrderStatus::PendingRequest,
    OrderStatus::Received,
    OrderStatus::Open,
    OrderStatus::Filled,
    OrderStatus::PartiallyFilled,
    OrderStatus::PendingCancel,
    OrderStatus::Cancelled,
    OrderStatus::PartiallyCancelled,
    OrderStatus::Failed,
    OrderStatus::Expired,
];

impl OrderStatus {
    /// Translate the exchange's numeric status code.
    ///
    /// An out-of-range code is a hard error, never defaulted.
    pub fn from_code(code: i64) -> Result<Self, OrderError> {
        usize::try_from(code)
            .ok()
            .and_then(|index| ORDER_STATES.get(index).copied())
            .ok_or(OrderError::UnknownStatusCode(code))
    }

    /// The numeric wire code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The exchange's label for this status.
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::PendingRequest => "PendingRequest",
            Self::Received => "Received",
            Self::Open => "Open",
            Self::Filled => "Filled",
            Self::PartiallyFilled => "PartiallyFilled",
            Self::PendingCancel => "PendingCancel",
            Self::Cancelled => "Cancelled",
            Self::PartiallyCancelled => "PartiallyCancelled",
            Self::Failed => "Failed",
            Self::Expired => "Expired",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Trading pair
// ============================================================================

/// A tradable market, identified by a composite symbol like
/// `EPIC-002_BTC-000`.
///
/// The symbol must contain exactly one `_` separating the base (trade)
/// token symbol from the quote token symbol. Exchange metadata can be
/// attached after a market lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct TradingPair {
    symbol: String,
    base: String,
    quote: String,
    meta: Option<MarketPairInfo>,
}

impl TradingPair {
    /// Validate and construct a pair from its composite symbol.
    pub fn new(symbol: impl Into<String>) -> Result<Self, OrderError> {
        let symbol = symbol.into();
        let mut parts = symbol.split(PAIR_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(quote), None) if !base.is_empty() && !quote.is_empty() => {
                Ok(Self {
                    base: base.to_string(),
                    quote: quote.to_string(),
                    symbol,
                    meta: None,
                })
            }
            _ => Err(OrderError::InvalidPair(symbol)),
        }
    }

    /// The composite symbol, e.g. `EPIC-002_BTC-000`.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The base (trade) token symbol, e.g. `EPIC-002`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The quote token symbol, e.g. `BTC-000`.
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Attached exchange metadata, if a lookup has filled it.
    pub fn meta(&self) -> Option<&MarketPairInfo> {
        self.meta.as_ref()
    }

    /// Attach exchange metadata from a market lookup.
    pub fn attach_meta(&mut self, meta: MarketPairInfo) {
        self.meta = Some(meta);
    }
}

impl FromStr for TradingPair {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

// ============================================================================
// Order lifecycle
// ============================================================================

/// Whether a submission hit the live or the test endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// `/api/v2/order/test`, validates but never executes.
    Test,
    /// `/api/v2/order`, a real order.
    Live,
}

/// Lifecycle state of an [`Order`].
#[derive(Debug, Clone, PartialEq)]
pub enum OrderState {
    /// Validated construction, nothing else applied.
    Prepared,
    /// Price and amount quantized to the pair's precision.
    Normalized {
        /// The precision applied, including its source.
        precision: PairPrecision,
    },
    /// Authentication fields attached; ready for transmission.
    Signed,
    /// The network call is in flight or completed without classification.
    Submitted(SubmitMode),
    /// Test submission passed exchange validation; nothing executed.
    TestValidated,
    /// Live submission acknowledged with a translated status.
    Acknowledged(OrderStatus),
    /// Submission refused, locally or by the exchange.
    Rejected(String),
    /// Cancellation sent, reply pending.
    CancelRequested,
    /// Cancellation acknowledged.
    Cancelled,
    /// Cancellation refused by the exchange.
    CancelFailed(String),
}

/// A validated order: trading intent before submission, plus the network
/// outcome afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pair: TradingPair,
    side: Side,
    amount: Decimal,
    price: Decimal,
    state: OrderState,
    signature: Option<SignedParams>,
    meta: Option<Value>,
    network_response: Option<Value>,
}

impl Order {
    /// Construct a prepared order.
    ///
    /// Fails immediately when the amount or price is not strictly positive.
    /// No network call is made.
    pub fn new(
        pair: TradingPair,
        side: Side,
        amount: Decimal,
        price: Decimal,
    ) -> Result<Self, OrderError> {
        if amount <= Decimal::ZERO {
            return Err(OrderError::NotPositive {
                field: "amount",
                value: amount,
            });
        }
        if price <= Decimal::ZERO {
            return Err(OrderError::NotPositive {
                field: "price",
                value: price,
            });
        }
        Ok(Self {
            pair,
            side,
            amount,
            price,
            state: OrderState::Prepared,
            signature: None,
            meta: None,
            network_response: None,
        })
    }

    /// Parse raw caller input into a prepared order.
    ///
    /// This is the string boundary: pair symbol, side and decimal fields
    /// are all validated here, before any network call.
    pub fn parse(pair: &str, side: &str, amount: &str, price: &str) -> Result<Self, OrderError> {
        let pair = TradingPair::new(pair)?;
        let side = side.parse()?;
        let amount = parse_decimal_field("amount", amount)?;
        let price = parse_decimal_field("price", price)?;
        Self::new(pair, side, amount, price)
    }

    /// The order's market.
    pub fn pair(&self) -> &TradingPair {
        &self.pair
    }

    /// Buy or sell.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Order amount, in the trade token.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Order price, in the quote token.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &OrderState {
        &self.state
    }

    /// The signed parameter set last sent for this order.
    pub fn signature(&self) -> Option<&SignedParams> {
        self.signature.as_ref()
    }

    /// Exchange-supplied order detail, attached after a round trip.
    pub fn meta(&self) -> Option<&Value> {
        self.meta.as_ref()
    }

    /// Last classified network reply; absent until a submission completes.
    pub fn network_response(&self) -> Option<&Value> {
        self.network_response.as_ref()
    }

    /// The exchange's identifier for this order, once acknowledged.
    pub fn order_id(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .or(self.network_response.as_ref())
            .and_then(|v| v.get("orderId"))
            .and_then(Value::as_str)
    }

    /// The wire parameters identifying this order's intent.
    pub(crate) fn to_params(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("symbol".to_string(), self.pair.symbol().to_string()),
            ("side".to_string(), self.side.code().to_string()),
            ("amount".to_string(), self.amount.to_string()),
            ("price".to_string(), self.price.to_string()),
        ])
    }

    // ------------------------------------------------------------------
    // State transitions, trading workflow only. Each consumes the order
    // and returns the next state.
    // ------------------------------------------------------------------

    /// Quantize price/amount to the pair's precision. Only the decimal
    /// scale changes, never sign or magnitude beyond the rounding.
    pub(crate) fn normalized(mut self, precision: PairPrecision) -> Self {
        self.amount = precision.quantize_amount(self.amount);
        self.price = precision.quantize_price(self.price);
        self.state = OrderState::Normalized { precision };
        self
    }

    pub(crate) fn signed(mut self, params: SignedParams) -> Self {
        self.signature = Some(params);
        self.state = OrderState::Signed;
        self
    }

    pub(crate) fn submitted(mut self, mode: SubmitMode) -> Self {
        self.state = OrderState::Submitted(mode);
        self
    }

    pub(crate) fn test_validated(mut self, response: Value) -> Self {
        self.network_response = Some(response);
        self.state = OrderState::TestValidated;
        self
    }

    pub(crate) fn acknowledged(mut self, status: OrderStatus, response: Value) -> Self {
        self.meta = Some(response.clone());
        self.network_response = Some(response);
        self.state = OrderState::Acknowledged(status);
        self
    }

    pub(crate) fn rejected(mut self, reason: impl Into<String>, response: Option<Value>) -> Self {
        self.network_response = response;
        self.state = OrderState::Rejected(reason.into());
        self
    }

    pub(crate) fn cancel_requested(mut self) -> Self {
        self.state = OrderState::CancelRequested;
        self
    }

    pub(crate) fn cancelled(mut self, response: Value) -> Self {
        self.network_response = Some(response);
        self.state = OrderState::Cancelled;
        self
    }

    pub(crate) fn cancel_failed(mut self, reason: impl Into<String>, response: Option<Value>) -> Self {
        self.network_response = response;
        self.state = OrderState::CancelFailed(reason.into());
        self
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order({} | {} {} for {} {})",
            match self.side {
                Side::Buy => "Buy",
                Side::Sell => "Sell",
            },
            self.amount,
            self.pair.base(),
            self.price,
            self.pair.quote(),
        )
    }
}

fn parse_decimal_field(field: &'static str, input: &str) -> Result<Decimal, OrderError> {
    Decimal::from_str(input.trim()).map_err(|_| OrderError::NotNumeric {
        field,
        input: input.to_string(),
    })
}

// ============================================================================
// History order
// ============================================================================

/// Read-only projection of an already-placed order, used for cancellation
/// lookups that don't need full validation.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryOrder {
    /// The order's market.
    pub pair: TradingPair,
    /// Raw order detail as reported by the exchange.
    pub meta: Value,
    /// Last classified network reply, if any.
    pub network_response: Option<Value>,
}

impl HistoryOrder {
    /// Wrap exchange-reported order detail.
    pub fn new(pair: TradingPair, meta: Value) -> Self {
        Self {
            pair,
            meta,
            network_response: None,
        }
    }

    /// The exchange's identifier for this order, if present in the detail.
    pub fn order_id(&self) -> Option<&str> {
        self.meta.get("orderId").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pair() -> TradingPair {
        TradingPair::new("EPIC-002_BTC-000").unwrap()
    }

    #[test]
    fn test_side_accepts_all_buy_forms() {
        for input in ["buy", "Buy", "BUY", "0"] {
            assert_eq!(input.parse::<Side>().unwrap(), Side::Buy, "input {input}");
        }
        assert_eq!(Side::from(0i64), Side::Buy);
        assert_eq!(Side::from(0.0f64), Side::Buy);
        assert_eq!(Side::from(false), Side::Buy);
    }

    #[test]
    fn test_side_accepts_all_sell_forms() {
        for input in ["sell", "Sell", "SELL", "1"] {
            assert_eq!(input.parse::<Side>().unwrap(), Side::Sell, "input {input}");
        }
        assert_eq!(Side::from(1i64), Side::Sell);
        assert_eq!(Side::from(1.0f64), Side::Sell);
        assert_eq!(Side::from(true), Side::Sell);
    }

    #[test]
    fn test_side_coerces_nonzero_to_sell() {
        assert_eq!(Side::from(7i64), Side::Sell);
        assert_eq!(Side::from(-1i64), Side::Sell);
    }

    #[test]
    fn test_side_rejects_garbage() {
        assert_eq!(
            "maybe".parse::<Side>(),
            Err(OrderError::InvalidSide("maybe".to_string()))
        );
    }

    #[test]
    fn test_pair_requires_single_separator() {
        assert!(TradingPair::new("EPIC-002_BTC-000").is_ok());
        assert!(matches!(
            TradingPair::new("EPIC-002"),
            Err(OrderError::InvalidPair(_))
        ));
        assert!(matches!(
            TradingPair::new("A_B_C"),
            Err(OrderError::InvalidPair(_))
        ));
        assert!(matches!(
            TradingPair::new("_BTC-000"),
            Err(OrderError::InvalidPair(_))
        ));
    }

    #[test]
    fn test_pair_splits_base_and_quote() {
        let pair = pair();
        assert_eq!(pair.base(), "EPIC-002");
        assert_eq!(pair.quote(), "BTC-000");
        assert_eq!(pair.to_string(), "EPIC-002/BTC-000");
    }

    #[test]
    fn test_order_rejects_non_positive_values() {
        assert!(matches!(
            Order::new(pair(), Side::Sell, dec!(5), dec!(0)),
            Err(OrderError::NotPositive { field: "price", .. })
        ));
        assert!(matches!(
            Order::new(pair(), Side::Sell, dec!(-3), dec!(0.00006)),
            Err(OrderError::NotPositive { field: "amount", .. })
        ));
    }

    #[test]
    fn test_order_parse_rejects_non_numeric() {
        assert!(matches!(
            Order::parse("EPIC-002_BTC-000", "sell", "five", "0.00006"),
            Err(OrderError::NotNumeric { field: "amount", .. })
        ));
    }

    #[test]
    fn test_order_starts_prepared() {
        let order = Order::new(pair(), Side::Sell, dec!(5), dec!(0.00006)).unwrap();
        assert_eq!(*order.state(), OrderState::Prepared);
        assert!(order.signature().is_none());
        assert!(order.network_response().is_none());
    }

    #[test]
    fn test_normalization_only_changes_scale() {
        let order = Order::new(pair(), Side::Sell, dec!(5), dec!(0.000060004)).unwrap();
        let order = order.normalized(PairPrecision::resolved(8, 8));

        assert_eq!(order.amount(), dec!(5));
        assert_eq!(order.price(), dec!(0.00006000));
        assert!(matches!(order.state(), OrderState::Normalized { .. }));
    }

    #[test]
    fn test_status_table_translation() {
        assert_eq!(OrderStatus::from_code(4).unwrap(), OrderStatus::Filled);
        assert_eq!(OrderStatus::from_code(0).unwrap(), OrderStatus::Unknown);
        assert_eq!(OrderStatus::from_code(10).unwrap(), OrderStatus::Expired);
        assert_eq!(OrderStatus::from_code(4).unwrap().label(), "Filled");
    }

    #[test]
    fn test_status_out_of_range_is_hard_error() {
        assert_eq!(
            OrderStatus::from_code(11),
            Err(OrderError::UnknownStatusCode(11))
        );
        assert_eq!(
            OrderStatus::from_code(-1),
            Err(OrderError::UnknownStatusCode(-1))
        );
    }

    #[test]
    fn test_to_params_uses_wire_codes() {
        let order = Order::new(pair(), Side::Sell, dec!(5), dec!(0.00006)).unwrap();
        let params = order.to_params();
        assert_eq!(params["symbol"], "EPIC-002_BTC-000");
        assert_eq!(params["side"], "1");
        assert_eq!(params["amount"], "5");
        assert_eq!(params["price"], "0.00006");
    }

    #[test]
    fn test_history_order_reads_order_id() {
        let order = HistoryOrder::new(pair(), serde_json::json!({ "orderId": "abc123" }));
        assert_eq!(order.order_id(), Some("abc123"));
    }
}
