//! # Domain Types
//!
//! Core types for the pricing pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Pricing Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  PricingInput   │   │ PriceBreakdown  │   │  PricingResult  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  original_price │   │  base_price     │   │  final_price    │       │
//! │  │  discount_rate  │   │  discount_amt   │   │  total_savings  │       │
//! │  │  coupon/promo/  │   │  per-stage      │   │  breakdown      │       │
//! │  │  spend&save ... │   │  deltas ...     │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │      Rate       │   │      Field      │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  OriginalPrice  │                             │
//! │  │  825 = 8.25%    │   │  DiscountRate…  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Grouped features (coupon, buy-X-get-Y, spend & save) keep their members
//! individually optional on [`PricingInput`] so that a *partially* filled
//! group remains representable - validation reports it on every member
//! field instead of the type system silently collapsing it.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A percentage rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 825 bps = 8.25%. Integer bps compose with integer cents without ever
/// touching binary floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a percentage (display-side convenience).
    pub fn from_percentage(pct: f64) -> Self {
        Rate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

/// One hundred percent, in basis points. Discount rates must stay strictly
/// below this; a 100% discount would zero any price before the other stages
/// run.
pub const ONE_HUNDRED_PERCENT_BPS: u32 = 10_000;

// =============================================================================
// Field
// =============================================================================

/// Names of the input fields, as validation reports them.
///
/// Serialized in camelCase to match the form layer's wire names
/// (`originalPrice`, `buyX`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Field {
    OriginalPrice,
    DiscountRate,
    ShippingFee,
    TaxRate,
    CouponValue,
    BuyX,
    GetY,
    ItemPrice,
    SpendAmount,
    SaveAmount,
}

impl Field {
    /// The wire/display name of the field.
    pub const fn name(&self) -> &'static str {
        match self {
            Field::OriginalPrice => "originalPrice",
            Field::DiscountRate => "discountRate",
            Field::ShippingFee => "shippingFee",
            Field::TaxRate => "taxRate",
            Field::CouponValue => "couponValue",
            Field::BuyX => "buyX",
            Field::GetY => "getY",
            Field::ItemPrice => "itemPrice",
            Field::SpendAmount => "spendAmount",
            Field::SaveAmount => "saveAmount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Pricing Input
// =============================================================================

/// Typed input to the pricing engine.
///
/// All fields except `original_price` are optional; an absent field disables
/// its pipeline stage. String parsing happens upstream in the form layer;
/// the engine only ever sees typed cents and basis points.
///
/// ## Example
/// ```rust
/// use tally_core::money::Money;
/// use tally_core::types::{PricingInput, Rate};
///
/// let input = PricingInput {
///     discount_rate: Some(Rate::from_bps(2000)), // 20%
///     ..PricingInput::new(Money::from_cents(10000))
/// };
/// assert_eq!(input.original_price, Some(Money::from_cents(10000)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingInput {
    /// The base price everything else applies to. Required, > 0.
    pub original_price: Option<Money>,

    /// Percentage discount in bps, `[0%, 100%)`.
    pub discount_rate: Option<Rate>,

    /// Flat shipping fee, >= 0. Added after all discounts.
    pub shipping_fee: Option<Money>,

    /// Tax rate in bps, applied to the post-shipping total.
    pub tax_rate: Option<Rate>,

    /// Whether the fixed coupon is engaged.
    pub use_coupon: bool,

    /// Coupon value, > 0. Required when `use_coupon` is set.
    pub coupon_value: Option<Money>,

    /// Buy-X-get-Y: number of items bought per free batch, >= 1.
    pub buy_x: Option<i64>,

    /// Buy-X-get-Y: free items per batch, >= 1.
    pub get_y: Option<i64>,

    /// Buy-X-get-Y: unit price of one item, > 0.
    pub item_price: Option<Money>,

    /// Spend & save: threshold the base price must reach, > 0.
    pub spend_amount: Option<Money>,

    /// Spend & save: flat rebate once the threshold is met, > 0.
    pub save_amount: Option<Money>,
}

impl PricingInput {
    /// Creates an input with only the base price set; every stage disabled.
    pub fn new(original_price: Money) -> Self {
        PricingInput {
            original_price: Some(original_price),
            ..PricingInput::default()
        }
    }
}

// =============================================================================
// Pricing Output
// =============================================================================

/// Itemized record of how much each pipeline stage added or subtracted.
///
/// All fields are non-negative; the sign is implied by the stage
/// (discount/coupon/promotion/spend&save subtract, shipping/tax add).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PriceBreakdown {
    /// The original price the pipeline started from.
    pub base_price: Money,

    /// Stage 1: percentage discount taken off the base.
    pub discount_amount: Money,

    /// Stage 2: value of the free items from buy-X-get-Y.
    pub promotion_amount: Money,

    /// Stage 3: coupon value actually applied (capped at the remainder).
    pub coupon_amount: Money,

    /// Stage 4: spend & save rebate actually applied.
    pub spend_save_amount: Money,

    /// Stage 5: shipping surcharge.
    pub shipping_fee: Money,

    /// Stage 6: tax on the post-shipping total.
    pub tax_amount: Money,
}

/// The engine's answer: final price, total savings, and the full breakdown.
///
/// Created fresh per evaluation and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PricingResult {
    /// What the customer pays. Never negative.
    pub final_price: Money,

    /// Sum of the four discount stages (shipping and tax excluded).
    pub total_savings: Money,

    /// Per-stage deltas.
    pub breakdown: PriceBreakdown,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_conversions() {
        let rate = Rate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert_eq!(rate.percentage(), 8.25);

        assert_eq!(Rate::from_percentage(8.25), Rate::from_bps(825));
        assert!(Rate::zero().is_zero());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::OriginalPrice.name(), "originalPrice");
        assert_eq!(Field::BuyX.to_string(), "buyX");
        assert_eq!(Field::SpendAmount.to_string(), "spendAmount");
    }

    #[test]
    fn test_input_new_disables_all_stages() {
        let input = PricingInput::new(Money::from_cents(10000));
        assert_eq!(input.original_price, Some(Money::from_cents(10000)));
        assert_eq!(input.discount_rate, None);
        assert!(!input.use_coupon);
        assert_eq!(input.buy_x, None);
    }

    #[test]
    fn test_breakdown_serializes_camel_case() {
        let breakdown = PriceBreakdown {
            base_price: Money::from_cents(10000),
            discount_amount: Money::from_cents(2000),
            ..PriceBreakdown::default()
        };
        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(json["basePrice"], serde_json::json!(10000));
        assert_eq!(json["discountAmount"], serde_json::json!(2000));
        assert_eq!(json["spendSaveAmount"], serde_json::json!(0));
    }

    #[test]
    fn test_field_serializes_camel_case() {
        let json = serde_json::to_string(&Field::ItemPrice).unwrap();
        assert_eq!(json, "\"itemPrice\"");
    }
}
