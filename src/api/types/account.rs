//! Account and funding types for the ViteX REST API.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exchange-wallet balance of one token, from `GET /api/v2/balance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    /// Balance available for new orders
    #[serde(with = "rust_decimal::serde::str")]
    pub available: Decimal,
    /// Balance locked by open orders
    #[serde(with = "rust_decimal::serde::str")]
    pub locked: Decimal,
}

impl TokenBalance {
    /// Total balance, available plus locked.
    pub fn total(&self) -> Decimal {
        self.available + self.locked
    }
}

/// One row of `GET /api/v2/deposit-withdraw`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositWithdrawRecord {
    /// Record time in seconds
    pub time: i64,
    /// Token symbol, e.g. `EPIC`
    pub token_symbol: String,
    /// Moved amount as a decimal string
    pub amount: String,
    /// Record type: 1 deposit, 2 withdrawal
    #[serde(rename = "type")]
    pub record_type: i64,
}

/// Fiat valuation of one token, from `GET /api/v2/exchange-rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    /// Token id
    pub token_id: String,
    /// Token symbol
    pub token_symbol: String,
    /// USD rate
    #[serde(default)]
    pub usd_rate: Option<f64>,
    /// CNY rate
    #[serde(default)]
    pub cny_rate: Option<f64>,
}

/// Current-cycle trade mining pools, from `GET /api/v2/trade_fee_info`.
///
/// Keys are the quote-token market group indexes (`"1"`–`"4"`), values are
/// decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeFeeInfo {
    /// VX allocated to each market group this cycle
    #[serde(default)]
    pub trade_pool_vx: HashMap<String, String>,
    /// Fees accumulated by each market group this cycle
    #[serde(default)]
    pub trade_pool_fee: HashMap<String, String>,
}
