//! REST API client module for ViteX.
//!
//! This module provides a type-safe HTTP client for the public
//! (unauthenticated) part of the ViteX REST API: tokens, markets, tickers,
//! trades, depth, candles, balances and server metadata.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vitex_sdk::api::VitexApiClient;
//! use vitex_sdk::network::DEFAULT_API_URL;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VitexApiClient::new(DEFAULT_API_URL)?;
//!
//!     let market = client.get_market_pair("EPIC-002_BTC-000").await?;
//!     println!("Last price: {:?}", market.last_price);
//!
//!     let ticker = client.get_book_ticker("EPIC-002_BTC-000").await?;
//!     println!("Best bid: {}, best ask: {}", ticker.bid_price, ticker.ask_price);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>`, an alias for `Result<T, ApiError>`.
//! Exchange-reported failures arrive as [`ApiError::Exchange`] with the
//! envelope's code and message:
//!
//! ```rust,ignore
//! use vitex_sdk::api::{ApiError, VitexApiClient};
//!
//! match client.get_market_pair("NOT_A_PAIR").await {
//!     Ok(market) => println!("precision {}", market.price_precision),
//!     Err(ApiError::Exchange { code, msg }) => println!("refused ({code}): {msg}"),
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```

pub mod client;
pub mod envelope;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{VitexApiClient, VitexApiClientBuilder};
pub use envelope::{ApiData, ApiEnvelope, ALREADY_CANCELED_MSG};
pub use error::{ApiError, ApiResult};
pub use types::*;
