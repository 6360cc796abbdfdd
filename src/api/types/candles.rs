//! Candlestick types for the ViteX REST API.

use serde::{Deserialize, Serialize};

/// Candle interval accepted by `GET /api/v2/klines`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KlineInterval {
    /// 1 minute candles
    #[default]
    #[serde(rename = "minute")]
    Minute,
    /// 30 minute candles
    #[serde(rename = "minute30")]
    Minute30,
    /// 1 hour candles
    #[serde(rename = "hour")]
    Hour,
    /// 6 hour candles
    #[serde(rename = "hour6")]
    Hour6,
    /// 12 hour candles
    #[serde(rename = "hour12")]
    Hour12,
    /// Daily candles
    #[serde(rename = "day")]
    Day,
    /// Weekly candles
    #[serde(rename = "week")]
    Week,
}

impl KlineInterval {
    /// Get the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Minute30 => "minute30",
            Self::Hour => "hour",
            Self::Hour6 => "hour6",
            Self::Hour12 => "hour12",
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl std::fmt::Display for KlineInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column-oriented candle arrays from `GET /api/v2/klines`.
///
/// All columns have the same length; index `i` across them forms one
/// candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candles {
    /// Candle open times in seconds
    #[serde(default)]
    pub t: Vec<i64>,
    /// Close prices
    #[serde(default)]
    pub c: Vec<f64>,
    /// Open prices
    #[serde(default)]
    pub p: Vec<f64>,
    /// High prices
    #[serde(default)]
    pub h: Vec<f64>,
    /// Low prices
    #[serde(default)]
    pub l: Vec<f64>,
    /// Volumes in the trade token
    #[serde(default)]
    pub v: Vec<f64>,
}

impl Candles {
    /// Number of candles in the response.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Whether the response contains no candles.
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Optional filters for `get_candles`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlesQuery {
    /// Start time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// End time in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    /// Search limit, max 1500, default 500
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl CandlesQuery {
    /// Restrict to a time range, in seconds.
    pub fn with_time_range(mut self, start: i64, end: i64) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Cap the number of returned candles.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
