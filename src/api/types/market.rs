//! Market-related types for the ViteX REST API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Full market detail from `GET /api/v2/market`.
///
/// Carries the pair's declared precision, fee rates and a 24h price
/// snapshot. The precision fields drive order normalization; the rest is
/// informational and tolerated as optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPairInfo {
    /// Composite pair symbol, e.g. `EPIC-002_BTC-000`
    pub symbol: String,
    /// Decimal places accepted for prices on this market
    pub price_precision: u32,
    /// Decimal places accepted for amounts on this market
    pub amount_precision: u32,
    /// Trade token symbol
    #[serde(default)]
    pub trading_currency: Option<String>,
    /// Quote token symbol
    #[serde(default)]
    pub quote_currency: Option<String>,
    /// Trade token id
    #[serde(default)]
    pub trading_currency_id: Option<String>,
    /// Quote token id
    #[serde(default)]
    pub quote_currency_id: Option<String>,
    /// Trade token display name
    #[serde(default)]
    pub trading_currency_name: Option<String>,
    /// Quote token display name
    #[serde(default)]
    pub quote_currency_name: Option<String>,
    /// Market operator address
    #[serde(default)]
    pub operator: Option<String>,
    /// Market operator display name
    #[serde(default)]
    pub operator_name: Option<String>,
    /// Minimum order size, in the quote token
    #[serde(default)]
    pub min_order_size: Option<String>,
    /// Operator maker fee rate
    #[serde(default)]
    pub operator_maker_fee: Option<f64>,
    /// Operator taker fee rate
    #[serde(default)]
    pub operator_taker_fee: Option<f64>,
    /// 24h high as a decimal string
    #[serde(default)]
    pub high_price: Option<String>,
    /// 24h low as a decimal string
    #[serde(default)]
    pub low_price: Option<String>,
    /// Last traded price as a decimal string
    #[serde(default)]
    pub last_price: Option<String>,
    /// 24h volume in the trade token
    #[serde(default)]
    pub volume: Option<String>,
    /// 24h volume in the quote token
    #[serde(default)]
    pub base_volume: Option<String>,
    /// Best bid as a decimal string
    #[serde(default)]
    pub bid_price: Option<String>,
    /// Best ask as a decimal string
    #[serde(default)]
    pub ask_price: Option<String>,
    /// Open buy order count
    #[serde(default)]
    pub open_buy_orders: Option<i64>,
    /// Open sell order count
    #[serde(default)]
    pub open_sell_orders: Option<i64>,
}

/// Compact market row from `GET /api/v2/markets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPairSummary {
    /// Composite pair symbol
    pub symbol: String,
    /// Trade token symbol
    pub trade_token_symbol: String,
    /// Quote token symbol
    pub quote_token_symbol: String,
    /// Trade token id
    pub trade_token: String,
    /// Quote token id
    pub quote_token: String,
    /// Decimal places accepted for prices
    pub price_precision: u32,
    /// Decimal places accepted for amounts
    pub quantity_precision: u32,
}

/// Per-market depth step bounds from the order limit endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthStepLimit {
    /// Minimum depth precision step
    pub min: u32,
    /// Maximum depth precision step
    pub max: u32,
}

/// Response of `GET /api/v2/limit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLimits {
    /// Minimum order quantity per quote token symbol
    #[serde(default)]
    pub min_amount: HashMap<String, String>,
    /// Depth step bounds per pair symbol
    #[serde(default)]
    pub depth_steps_limit: HashMap<String, DepthStepLimit>,
}

/// One side level of the order book: `[price, quantity]` decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel(pub String, pub String);

impl PriceLevel {
    /// Level price as a decimal string.
    pub fn price(&self) -> &str {
        &self.0
    }

    /// Quantity resting at this level as a decimal string.
    pub fn quantity(&self) -> &str {
        &self.1
    }
}

/// Order book snapshot from `GET /api/v2/depth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depth {
    /// Snapshot timestamp in milliseconds
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Ask levels, best first
    #[serde(default)]
    pub asks: Vec<PriceLevel>,
    /// Bid levels, best first
    #[serde(default)]
    pub bids: Vec<PriceLevel>,
}
