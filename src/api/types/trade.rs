//! Trade history types for the ViteX REST API.

use serde::{Deserialize, Serialize};

use crate::orders::Side;

/// A single tick from `GET /api/v2/trades`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeTick {
    /// Execution time in milliseconds
    pub timestamp: i64,
    /// Execution price as a decimal string
    pub price: String,
    /// Executed quantity as a decimal string
    pub amount: String,
    /// Taker side
    pub side: Side,
}

/// A detailed execution record from `GET /api/v2/trades/all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeDetail {
    /// Execution id
    pub trade_id: String,
    /// Composite pair symbol
    pub symbol: String,
    /// Trade token symbol
    #[serde(default)]
    pub trade_token_symbol: Option<String>,
    /// Quote token symbol
    #[serde(default)]
    pub quote_token_symbol: Option<String>,
    /// Trade token id
    #[serde(default)]
    pub trade_token: Option<String>,
    /// Quote token id
    #[serde(default)]
    pub quote_token: Option<String>,
    /// Execution price as a decimal string
    pub price: String,
    /// Executed quantity in the trade token
    pub quantity: String,
    /// Executed value in the quote token
    #[serde(default)]
    pub amount: Option<String>,
    /// Execution time in seconds
    pub time: i64,
    /// Taker side
    pub side: Side,
    /// Fee paid by the buyer
    #[serde(default)]
    pub buy_fee: Option<String>,
    /// Fee paid by the seller
    #[serde(default)]
    pub sell_fee: Option<String>,
    /// Chain height of the execution
    #[serde(default)]
    pub block_height: Option<i64>,
}

/// Response page of `GET /api/v2/trades/all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradesPage {
    /// Chain height of the snapshot, when reported
    #[serde(default)]
    pub height: Option<i64>,
    /// Execution records
    #[serde(default)]
    pub trade: Vec<TradeDetail>,
    /// Total matches, -1 unless the query asked for a count
    #[serde(default)]
    pub total: Option<i64>,
}

/// Optional filters for `get_trades_detailed`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesQuery {
    /// Restrict to one order id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Start time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// End time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    /// Order side code, 0 buy / 1 sell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<u8>,
    /// Search starting index, default 0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Search limit, default 30, max 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// 1 to include the total match count in the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u8>,
}

impl TradesQuery {
    /// Restrict to one order.
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// Restrict to one side.
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side.code());
        self
    }

    /// Restrict to a time range, in seconds.
    pub fn with_time_range(mut self, start: i64, end: i64) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Set the search window.
    pub fn with_page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }
}
