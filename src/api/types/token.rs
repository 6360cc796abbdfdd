//! Token-related types for the ViteX REST API.

use serde::{Deserialize, Serialize};

/// A token registered on the exchange.
///
/// The list endpoints return only a subset of these fields; everything
/// beyond `tokenId` and `symbol` is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Token id, e.g. `tti_f370fadb275bc2a1a839c753`
    pub token_id: String,
    /// Token symbol, e.g. `EPIC-002`
    pub symbol: String,
    /// Token name, e.g. `Epic Cash`
    #[serde(default)]
    pub name: Option<String>,
    /// Symbol without the index suffix, e.g. `EPIC`
    #[serde(default)]
    pub original_symbol: Option<String>,
    /// Total supply in atomic units, as a decimal string
    #[serde(default)]
    pub total_supply: Option<String>,
    /// Issuing address
    #[serde(default)]
    pub owner: Option<String>,
    /// Number of decimal places of the token itself
    #[serde(default)]
    pub token_decimals: Option<u32>,
    /// Smallest representable unit, e.g. `0.00000001`
    #[serde(default)]
    pub token_accuracy: Option<String>,
    /// Icon URL
    #[serde(default)]
    pub url_icon: Option<String>,
}

/// Query parameters for the token list endpoint.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensQuery {
    /// Token category, `quote` or `all` (default `all`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Fuzzy symbol filter, e.g. `EPIC`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_symbol_like: Option<String>,
    /// Search starting index, default 0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Search limit, max 500, default 500
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TokensQuery {
    /// Restrict results to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Fuzzy-match token symbols.
    pub fn with_symbol_like(mut self, pattern: impl Into<String>) -> Self {
        self.token_symbol_like = Some(pattern.into());
        self
    }

    /// Set the search window.
    pub fn with_page(mut self, offset: u32, limit: u32) -> Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }
}
