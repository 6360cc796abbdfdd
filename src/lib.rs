//! # ViteX Rust SDK
//!
//! A Rust client for the [ViteX](https://x.vite.net/) exchange HTTP API v2.
//!
//! ## Modules
//!
//! - [`api`]: REST client for the public market-data endpoints
//! - [`trading`]: signed trading operations (place, test, cancel)
//! - [`auth`]: request canonicalization and HMAC-SHA256 signing
//! - [`orders`]: validated order domain model and lifecycle
//! - [`precision`]: per-pair decimal precision resolution
//!
//! ## Quick Start: market data
//!
//! ```rust,ignore
//! use vitex_sdk::api::VitexApiClient;
//! use vitex_sdk::network::DEFAULT_API_URL;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VitexApiClient::new(DEFAULT_API_URL)?;
//!
//!     let pairs = client.get_market_pairs(None, None).await?;
//!     println!("{} markets", pairs.len());
//!
//!     let time = client.get_server_time().await?;
//!     println!("server time: {time} ms");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Quick Start: trading
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
//!     // Validation happens before any network call; precision is resolved
//!     // from the pair's metadata before signing.
//!     let order = Order::parse("EPIC-002_BTC-000", "sell", "5", "0.00006")?;
//!     let order = client.test_order(order).await?;
//!     println!("{:?}", order.state());
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// REST API client module for public market data.
pub mod api;

/// Request canonicalization and HMAC-SHA256 signing for private endpoints.
pub mod auth;

/// Network URL constants.
pub mod network;

/// Validated order domain model and lifecycle states.
pub mod orders;

/// Per-pair price/amount precision resolution and quantization.
pub mod precision;

/// Signed trading operations: place, test and cancel orders.
pub mod trading;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use vitex_sdk::prelude::*;
/// ```
pub mod prelude {
    // API module exports
    pub use crate::api::{
        ApiData, ApiEnvelope, ApiError, ApiResult, VitexApiClient, VitexApiClientBuilder,
        // Common types
        BookTicker, CancelledOrder, Candles, CandlesQuery, Depth, DepositWithdrawRecord,
        ExchangeRate, KlineInterval, MarketPairInfo, MarketPairSummary, OrderInfo, OrderLimits,
        OrdersPage, OrdersQuery, PriceLevel, TickerStats, TokenBalance, TokenInfo, TokensQuery,
        TradeDetail, TradeFeeInfo, TradesPage, TradesQuery, TradeTick,
    };

    // Signing
    pub use crate::auth::{canonical_query, sign_params, Credentials, SignedParams};

    // Domain model
    pub use crate::orders::{
        HistoryOrder, Order, OrderError, OrderState, OrderStatus, Side, SubmitMode, TradingPair,
    };

    // Precision policy
    pub use crate::precision::{PairPrecision, PrecisionSource, DEFAULT_DECIMALS};

    // Trading workflow
    pub use crate::trading::VitexTradingClient;

    // Network constants
    pub use crate::network::DEFAULT_API_URL;
}
