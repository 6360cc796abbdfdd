//! Order-related wire types for the ViteX REST API.

use serde::{Deserialize, Serialize};

use crate::orders::{OrderError, OrderStatus, Side};

/// An order as reported by the exchange.
///
/// `status` is kept as the raw numeric code; translate it with
/// [`OrderInfo::order_status`], which refuses out-of-range codes instead
/// of guessing a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    /// Owning account address
    #[serde(default)]
    pub address: Option<String>,
    /// Exchange order id
    pub order_id: String,
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
    /// Order side
    pub side: Side,
    /// Limit price as a decimal string
    pub price: String,
    /// Order quantity in the trade token
    pub quantity: String,
    /// Order value in the quote token
    #[serde(default)]
    pub amount: Option<String>,
    /// Executed quantity in the trade token
    #[serde(default)]
    pub executed_quantity: Option<String>,
    /// Executed value in the quote token
    #[serde(default)]
    pub executed_amount: Option<String>,
    /// Executed fraction of the order
    #[serde(default)]
    pub executed_percent: Option<String>,
    /// Average execution price
    #[serde(default)]
    pub executed_avg_price: Option<String>,
    /// Fee paid, in the quote token
    #[serde(default)]
    pub fee: Option<String>,
    /// Numeric status code (0–10)
    pub status: i64,
    /// Order type (0 = limit)
    #[serde(default, rename = "type")]
    pub order_type: Option<i64>,
    /// Creation time in seconds
    #[serde(default)]
    pub create_time: Option<i64>,
}

impl OrderInfo {
    /// Translate the raw status code. Out-of-range codes are a hard error.
    pub fn order_status(&self) -> Result<OrderStatus, OrderError> {
        OrderStatus::from_code(self.status)
    }
}

/// Response page of `GET /api/v2/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersPage {
    /// Orders matching the query
    #[serde(default)]
    pub order: Vec<OrderInfo>,
    /// Total matches, -1 unless the query asked for a count
    #[serde(default)]
    pub total: Option<i64>,
}

/// Row of the `DELETE /api/v2/orders` (cancel-all) response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledOrder {
    /// Composite pair symbol
    pub symbol: String,
    /// Exchange order id
    pub order_id: String,
    /// Id of the cancellation request transaction
    #[serde(default)]
    pub cancel_request: Option<String>,
    /// Numeric status code after the cancel request
    pub status: i64,
}

/// Optional filters for `get_orders`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersQuery {
    /// Restrict to one pair symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Restrict to one quote token symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_token_symbol: Option<String>,
    /// Restrict to one trade token symbol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_token_symbol: Option<String>,
    /// Start time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// End time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    /// Order side code, 0 buy / 1 sell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<u8>,
    /// Numeric status filter (0–10); 3/5 open-ish, 7/8 cancelled-ish
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
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

impl OrdersQuery {
    /// Restrict to one pair.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Restrict to one side.
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side.code());
        self
    }

    /// Restrict to one numeric status code.
    pub fn with_status(mut self, status: i64) -> Self {
        self.status = Some(status);
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

    /// Ask for the total match count.
    pub fn with_total(mut self) -> Self {
        self.total = Some(1);
        self
    }
}
