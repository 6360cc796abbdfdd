//! Price and amount precision handling for order submission.
//!
//! The exchange declares a decimal precision per trading pair
//! (`pricePrecision` / `amountPrecision` on the market detail endpoint) and
//! rejects or silently truncates values that do not match it. Before an
//! order is signed, its `price` and `amount` are quantized to the pair's
//! precision and rendered as fixed-point strings.
//!
//! Resolution is best-effort: when the metadata lookup fails the values are
//! quantized to an 8-decimal default instead, and the exchange's own
//! server-side validation acts as the backstop. The [`PrecisionSource`]
//! carried by every [`PairPrecision`] makes the two paths distinguishable.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places assumed when a pair's precision cannot be resolved.
pub const DEFAULT_DECIMALS: u32 = 8;

/// How a [`PairPrecision`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionSource {
    /// Read from the pair's exchange metadata.
    Resolved,
    /// Metadata lookup failed or was skipped; the 8-decimal default applies.
    DefaultFallback,
}

/// Resolved decimal precision for one trading pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairPrecision {
    /// Fractional digits for the price field.
    pub price: u32,
    /// Fractional digits for the amount field.
    pub amount: u32,
    /// Where the values came from.
    pub source: PrecisionSource,
}

impl Default for PairPrecision {
    fn default() -> Self {
        Self {
            price: DEFAULT_DECIMALS,
            amount: DEFAULT_DECIMALS,
            source: PrecisionSource::DefaultFallback,
        }
    }
}

impl PairPrecision {
    /// Precision read from exchange metadata.
    pub fn resolved(price: u32, amount: u32) -> Self {
        Self {
            price,
            amount,
            source: PrecisionSource::Resolved,
        }
    }

    /// Quantize a price to this pair's price precision.
    pub fn quantize_price(&self, value: Decimal) -> Decimal {
        quantize(value, self.price)
    }

    /// Quantize an amount to this pair's amount precision.
    pub fn quantize_amount(&self, value: Decimal) -> Decimal {
        quantize(value, self.amount)
    }

    /// Render a price as a fixed-point string at this pair's precision.
    pub fn format_price(&self, value: Decimal) -> String {
        format_fixed(value, self.price)
    }

    /// Render an amount as a fixed-point string at this pair's precision.
    pub fn format_amount(&self, value: Decimal) -> String {
        format_fixed(value, self.amount)
    }
}

/// Round a value to `decimals` fractional digits, half-to-even.
///
/// Only the scale changes; re-quantizing an already-correctly-scaled value
/// is a no-op.
pub fn quantize(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven)
}

/// Quantize and render a value with exactly `decimals` fractional digits.
///
/// No scientific notation; trailing zeros are kept up to the requested
/// width (`5` at 8 decimals renders as `5.00000000`).
pub fn format_fixed(value: Decimal, decimals: u32) -> String {
    format!("{:.prec$}", quantize(value, decimals), prec = decimals as usize)
}

/// Quantize the `amount` and `price` entries of an order parameter map in
/// place.
///
/// When either entry is absent or empty there is nothing to normalize and
/// the map is returned untouched. When either value fails to parse as a
/// decimal both are left untouched; the exchange validates server-side.
/// All other entries pass through unchanged.
pub fn normalize_params(params: &mut BTreeMap<String, String>, precision: &PairPrecision) {
    let amount = params.get("amount").filter(|v| !v.is_empty());
    let price = params.get("price").filter(|v| !v.is_empty());

    let (Some(amount), Some(price)) = (amount, price) else {
        return;
    };

    let (Ok(amount), Ok(price)) = (Decimal::from_str(amount), Decimal::from_str(price)) else {
        return;
    };

    let amount = precision.format_amount(amount);
    let price = precision.format_price(price);
    params.insert("amount".to_string(), amount);
    params.insert("price".to_string(), price);
}
