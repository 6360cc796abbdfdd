//! ViteX REST API client implementation.
//!
//! The [`VitexApiClient`] provides a type-safe interface for the public
//! (unauthenticated) ViteX REST API.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitex_sdk::api::VitexApiClient;
//! use vitex_sdk::network::DEFAULT_API_URL;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = VitexApiClient::new(DEFAULT_API_URL)?;
//!
//!     // Get all trading pairs
//!     let pairs = client.get_market_pairs(None, None).await?;
//!     println!("Found {} pairs", pairs.len());
//!
//!     // Get one market's detail
//!     let market = client.get_market_pair("EPIC-002_BTC-000").await?;
//!     println!("Price precision: {}", market.price_precision);
//!
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::api::envelope::ApiEnvelope;
use crate::api::error::{ApiError, ApiResult};
use crate::api::types::*;
use crate::orders::TradingPair;
use crate::precision::PairPrecision;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring [`VitexApiClient`].
#[derive(Debug, Clone)]
pub struct VitexApiClientBuilder {
    base_url: String,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    verbose: bool,
}

impl VitexApiClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
            verbose: false,
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Echo every raw response body at debug level before classification.
    ///
    /// Diagnostic only; never alters returned values.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<VitexApiClient> {
        let mut builder = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10);

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        for (name, value) in self.default_headers {
            let header_name = reqwest::header::HeaderName::try_from(name.as_str())
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = reqwest::header::HeaderValue::from_str(&value)
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        builder = builder.default_headers(headers);

        let http_client = builder.build()?;

        Ok(VitexApiClient {
            http_client,
            base_url: self.base_url,
            verbose: self.verbose,
            precision_cache: Arc::new(RwLock::new(HashMap::new())),
        })
    }
}

/// ViteX public REST API client.
///
/// Provides methods for all read-only endpoints: tokens, markets, tickers,
/// trades, depth, candles, balances and server metadata. For signed trading
/// operations wrap this client in a
/// [`VitexTradingClient`](crate::trading::VitexTradingClient).
#[derive(Debug, Clone)]
pub struct VitexApiClient {
    http_client: Client,
    base_url: String,
    verbose: bool,
    precision_cache: Arc<RwLock<HashMap<String, PairPrecision>>>,
}

impl VitexApiClient {
    /// Create a new client with the given base URL.
    ///
    /// Uses default settings (30s timeout, connection pooling).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        VitexApiClientBuilder::new(base_url).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(base_url: impl Into<String>) -> VitexApiClientBuilder {
        VitexApiClientBuilder::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying HTTP client, shared with the trading client.
    pub(crate) fn http(&self) -> &Client {
        &self.http_client
    }

    /// Whether raw responses are echoed at debug level.
    pub(crate) fn verbose(&self) -> bool {
        self.verbose
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Execute a GET request and classify the envelope into its payload.
    async fn get_data<T: DeserializeOwned>(&self, path: &str, query: Option<String>) -> ApiResult<T> {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(&query);
        }

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if self.verbose {
            tracing::debug!(%url, body = %body, "raw API response");
        }

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus(status.as_u16(), body));
        }

        let envelope: ApiEnvelope<T> = serde_json::from_str(&body)
            .map_err(|e| ApiError::Deserialize(format!("{} (from {})", e, path)))?;
        envelope.classify()?.into_data()
    }

    /// Serialize a query struct into an encoded query string.
    fn encode_query<Q: Serialize>(query: &Q) -> ApiResult<String> {
        serde_urlencoded::to_string(query)
            .map_err(|e| ApiError::InvalidParameter(format!("unencodable query: {}", e)))
    }

    // =========================================================================
    // Token endpoints
    // =========================================================================

    /// Get all registered tokens.
    pub async fn get_all_tokens(&self, query: &TokensQuery) -> ApiResult<Vec<TokenInfo>> {
        self.get_data("/api/v2/tokens", Some(Self::encode_query(query)?)).await
    }

    /// Get one token's detail.
    ///
    /// The argument may be a token symbol (e.g. `EPIC-002`) or a token id
    /// (e.g. `tti_f370fadb275bc2a1a839c753`); a `-` in the argument selects
    /// the symbol form.
    pub async fn get_token(&self, symbol_or_id: &str) -> ApiResult<TokenInfo> {
        let field = if symbol_or_id.contains('-') {
            "tokenSymbol"
        } else {
            "tokenId"
        };
        let query = Self::encode_query(&[(field, symbol_or_id)])?;
        self.get_data("/api/v2/token/detail", Some(query)).await
    }

    /// Get tokens already listed against a quote token.
    pub async fn get_listed_tokens(&self, quote_token_symbol: &str) -> ApiResult<Vec<TokenInfo>> {
        let query = Self::encode_query(&[("quoteTokenSymbol", quote_token_symbol)])?;
        self.get_data("/api/v2/token/mapped", Some(query)).await
    }

    /// Get tokens not yet listed against a quote token.
    pub async fn get_unlisted_tokens(&self, quote_token_symbol: &str) -> ApiResult<Vec<TokenInfo>> {
        let query = Self::encode_query(&[("quoteTokenSymbol", quote_token_symbol)])?;
        self.get_data("/api/v2/token/unmapped", Some(query)).await
    }

    // =========================================================================
    // Market endpoints
    // =========================================================================

    /// Get one market's full detail, including its declared precision.
    pub async fn get_market_pair(&self, symbol: &str) -> ApiResult<MarketPairInfo> {
        let query = Self::encode_query(&[("symbol", symbol)])?;
        self.get_data("/api/v2/market", Some(query)).await
    }

    /// Get one market as a domain [`TradingPair`] with its metadata attached.
    pub async fn get_trading_pair(&self, symbol: &str) -> ApiResult<TradingPair> {
        let info = self.get_market_pair(symbol).await?;
        let mut pair = TradingPair::new(&info.symbol)?;
        pair.attach_meta(info);
        Ok(pair)
    }

    /// Get all trading pairs.
    pub async fn get_market_pairs(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult<Vec<MarketPairSummary>> {
        let query = Self::encode_query(&[("offset", offset), ("limit", limit)])?;
        self.get_data("/api/v2/markets", Some(query)).await
    }

    /// Get minimum order quantities and depth step bounds.
    pub async fn get_order_limits(&self) -> ApiResult<OrderLimits> {
        self.get_data("/api/v2/limit", None).await
    }

    /// Get an order book snapshot.
    pub async fn get_depth(
        &self,
        symbol: &str,
        limit: Option<u32>,
        precision: Option<u32>,
    ) -> ApiResult<Depth> {
        let query = Self::encode_query(&[
            ("symbol", Some(symbol.to_string())),
            ("limit", limit.map(|l| l.to_string())),
            ("precision", precision.map(|p| p.to_string())),
        ])?;
        self.get_data("/api/v2/depth", Some(query)).await
    }

    // =========================================================================
    // Order endpoints (read-only)
    // =========================================================================

    /// Get a single order by account address and order id.
    pub async fn get_order(&self, address: &str, order_id: &str) -> ApiResult<OrderInfo> {
        let query = Self::encode_query(&[("address", address), ("orderId", order_id)])?;
        self.get_data("/api/v2/order", Some(query)).await
    }

    /// Get an account's orders, optionally filtered.
    pub async fn get_orders(&self, address: &str, query: &OrdersQuery) -> ApiResult<OrdersPage> {
        let mut encoded = Self::encode_query(&[("address", address)])?;
        let filters = Self::encode_query(query)?;
        if !filters.is_empty() {
            encoded.push('&');
            encoded.push_str(&filters);
        }
        self.get_data("/api/v2/orders", Some(encoded)).await
    }

    // =========================================================================
    // Ticker endpoints
    // =========================================================================

    /// Get 24h rolling statistics; all pairs when no quote filter is given.
    pub async fn get_ticker_stats(
        &self,
        quote_token_symbol: Option<&str>,
    ) -> ApiResult<Vec<TickerStats>> {
        let query = Self::encode_query(&[("quoteTokenSymbol", quote_token_symbol)])?;
        self.get_data("/api/v2/ticker/24hr", Some(query)).await
    }

    /// Get the current best bid/ask for a pair.
    pub async fn get_book_ticker(&self, symbol: &str) -> ApiResult<BookTicker> {
        let query = Self::encode_query(&[("symbol", symbol)])?;
        self.get_data("/api/v2/ticker/bookTicker", Some(query)).await
    }

    // =========================================================================
    // Trade endpoints
    // =========================================================================

    /// Get recent trades for a pair.
    pub async fn get_trades(&self, symbol: &str, limit: Option<u32>) -> ApiResult<Vec<TradeTick>> {
        let query = Self::encode_query(&[
            ("symbol", Some(symbol.to_string())),
            ("limit", limit.map(|l| l.to_string())),
        ])?;
        self.get_data("/api/v2/trades", Some(query)).await
    }

    /// Get detailed trade history for a pair.
    pub async fn get_trades_detailed(
        &self,
        symbol: &str,
        query: &TradesQuery,
    ) -> ApiResult<TradesPage> {
        let mut encoded = Self::encode_query(&[("symbol", symbol)])?;
        let filters = Self::encode_query(query)?;
        if !filters.is_empty() {
            encoded.push('&');
            encoded.push_str(&filters);
        }
        self.get_data("/api/v2/trades/all", Some(encoded)).await
    }

    /// Get candlestick data for a pair.
    pub async fn get_candles(
        &self,
        symbol: &str,
        interval: KlineInterval,
        query: &CandlesQuery,
    ) -> ApiResult<Candles> {
        let mut encoded =
            Self::encode_query(&[("symbol", symbol), ("interval", interval.as_str())])?;
        let filters = Self::encode_query(query)?;
        if !filters.is_empty() {
            encoded.push('&');
            encoded.push_str(&filters);
        }
        self.get_data("/api/v2/klines", Some(encoded)).await
    }

    // =========================================================================
    // Account endpoints
    // =========================================================================

    /// Get the exchange-wallet balances of an account, keyed by token symbol.
    pub async fn get_balances(&self, address: &str) -> ApiResult<HashMap<String, TokenBalance>> {
        let query = Self::encode_query(&[("address", address)])?;
        self.get_data("/api/v2/balance", Some(query)).await
    }

    /// Get an account's deposit/withdrawal records for one token.
    pub async fn get_deposit_withdraw_records(
        &self,
        address: &str,
        token_id: &str,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> ApiResult<Vec<DepositWithdrawRecord>> {
        let query = Self::encode_query(&[
            ("address", Some(address.to_string())),
            ("tokenId", Some(token_id.to_string())),
            ("offset", offset.map(|o| o.to_string())),
            ("limit", limit.map(|l| l.to_string())),
        ])?;
        self.get_data("/api/v2/deposit-withdraw", Some(query)).await
    }

    /// Get fiat valuations for tokens, by symbols and/or ids
    /// (comma-separated lists).
    pub async fn get_exchange_rates(
        &self,
        token_symbols: Option<&str>,
        token_ids: Option<&str>,
    ) -> ApiResult<Vec<ExchangeRate>> {
        let query = Self::encode_query(&[
            ("tokenSymbols", token_symbols),
            ("tokenIds", token_ids),
        ])?;
        self.get_data("/api/v2/exchange-rate", Some(query)).await
    }

    /// Get the current cycle's trade mining pools.
    pub async fn get_trade_fee_info(&self) -> ApiResult<TradeFeeInfo> {
        self.get_data("/api/v2/trade_fee_info", None).await
    }

    // =========================================================================
    // Server metadata
    // =========================================================================

    /// Get the exchange's server time in milliseconds.
    ///
    /// Signed requests must carry this clock, not the local one: the
    /// exchange rejects requests timestamped more than 5s before or 1s
    /// after its own time.
    pub async fn get_server_time(&self) -> ApiResult<i64> {
        self.get_data("/api/v2/time", None).await
    }

    /// Get the exchange's server time as a UTC datetime.
    pub async fn get_server_time_utc(&self) -> ApiResult<DateTime<Utc>> {
        let millis = self.get_server_time().await?;
        DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| ApiError::Deserialize(format!("server time {millis} out of range")))
    }

    /// Get the current USD/CNY rate.
    pub async fn get_usd_cny_rate(&self) -> ApiResult<f64> {
        self.get_data("/api/v2/usd-cny", None).await
    }

    // =========================================================================
    // Precision resolution
    // =========================================================================

    /// Resolve a pair's declared price/amount precision.
    ///
    /// Successful lookups are cached per symbol (declared precision does
    /// not change). Any lookup failure falls back to the 8-decimal default
    /// without caching, so a later call can still resolve; the returned
    /// [`PairPrecision::source`] records which path was taken.
    pub async fn pair_precision(&self, symbol: &str) -> PairPrecision {
        {
            let cache = self.precision_cache.read().await;
            if let Some(precision) = cache.get(symbol) {
                return *precision;
            }
        }

        let resolved = match self.get_market_pair(symbol).await {
            Ok(info) => PairPrecision::resolved(info.price_precision, info.amount_precision),
            Err(err) => {
                tracing::debug!(%symbol, error = %err, "precision lookup failed, using defaults");
                return PairPrecision::default();
            }
        };

        let mut cache = self.precision_cache.write().await;
        cache.insert(symbol.to_string(), resolved);
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = VitexApiClient::new("https://api.vitex.net").unwrap();
        assert_eq!(client.base_url(), "https://api.vitex.net");
        assert!(!client.verbose());
    }

    #[test]
    fn test_client_builder_trims_trailing_slash() {
        let client = VitexApiClient::builder("https://api.vitex.net/")
            .timeout_secs(60)
            .header("X-Custom", "test")
            .verbose(true)
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://api.vitex.net");
        assert!(client.verbose());
    }

    #[test]
    fn test_encode_query_skips_none() {
        let encoded =
            VitexApiClient::encode_query(&[("offset", None::<u32>), ("limit", Some(10))]).unwrap();
        assert_eq!(encoded, "limit=10");
    }

    #[test]
    fn test_pair_precision_falls_back_without_network() {
        use crate::precision::PrecisionSource;

        // Nothing listens on the discard port; the lookup fails fast.
        let client = VitexApiClient::new("http://127.0.0.1:9").unwrap();
        let precision = tokio_test::block_on(client.pair_precision("EPIC-002_BTC-000"));

        assert_eq!(precision.source, PrecisionSource::DefaultFallback);
        assert_eq!(precision.price, 8);
        assert_eq!(precision.amount, 8);
    }
}
