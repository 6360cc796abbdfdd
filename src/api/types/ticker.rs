//! Ticker types for the ViteX REST API.

use serde::{Deserialize, Serialize};

/// 24-hour rolling statistics for one pair, from `GET /api/v2/ticker/24hr`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerStats {
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
    /// Opening price as a decimal string
    #[serde(default)]
    pub open_price: Option<String>,
    /// Previous close as a decimal string
    #[serde(default)]
    pub prev_close_price: Option<String>,
    /// Closing price as a decimal string
    #[serde(default)]
    pub close_price: Option<String>,
    /// Absolute price change as a decimal string
    #[serde(default)]
    pub price_change: Option<String>,
    /// Relative price change
    #[serde(default)]
    pub price_change_percent: Option<f64>,
    /// 24h high as a decimal string
    #[serde(default)]
    pub high_price: Option<String>,
    /// 24h low as a decimal string
    #[serde(default)]
    pub low_price: Option<String>,
    /// 24h volume in the trade token
    #[serde(default)]
    pub quantity: Option<String>,
    /// 24h volume in the quote token
    #[serde(default)]
    pub amount: Option<String>,
    /// Decimal places accepted for prices
    pub price_precision: u32,
    /// Decimal places accepted for amounts
    pub quantity_precision: u32,
    /// Window open time in milliseconds
    #[serde(default)]
    pub open_time: Option<i64>,
    /// Window close time in milliseconds
    #[serde(default)]
    pub close_time: Option<i64>,
}

/// Best bid/ask snapshot from `GET /api/v2/ticker/bookTicker`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTicker {
    /// Composite pair symbol
    pub symbol: String,
    /// Best bid price as a decimal string
    pub bid_price: String,
    /// Quantity at the best bid
    pub bid_quantity: String,
    /// Best ask price as a decimal string
    pub ask_price: String,
    /// Quantity at the best ask
    pub ask_quantity: String,
    /// Chain height of the snapshot, when reported
    #[serde(default)]
    pub height: Option<i64>,
}
