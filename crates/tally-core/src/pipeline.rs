//! # Pricing Pipeline
//!
//! The fixed-order evaluator at the center of the engine.
//!
//! ## Stage Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pricing Pipeline                                   │
//! │                                                                         │
//! │  base price                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  1. Percentage discount      running -= round(running × rate)           │
//! │  2. Buy-X-get-Y promotion    running -= min(running, free items value)  │
//! │  3. Fixed coupon             running -= min(running, coupon)            │
//! │  4. Spend & save rebate      running -= min(running, save)              │
//! │  5. Shipping                 running += fee        (never discounted)   │
//! │  6. Tax                      running += round(running × rate)           │
//! │  7. Floor                    running  = max(0, running)                 │
//! │                                                                         │
//! │  The order is CONTRACTUAL: tax applies to shipping, the promotion       │
//! │  quantity is computed from the ORIGINAL base, and reordering changes    │
//! │  the numbers. Tests pin every one of these choices.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//! use tally_core::pipeline::evaluate;
//! use tally_core::types::{PricingInput, Rate};
//!
//! let input = PricingInput {
//!     discount_rate: Some(Rate::from_bps(2000)), // 20%
//!     ..PricingInput::new(Money::from_cents(10000))
//! };
//!
//! let result = evaluate(&input);
//! assert_eq!(result.final_price, Money::from_cents(8000));
//! assert_eq!(result.total_savings, Money::from_cents(2000));
//! ```

use crate::money::Money;
use crate::types::{PriceBreakdown, PricingInput, PricingResult};

/// Runs the pricing pipeline over a validated input.
///
/// ## Contract
/// The caller validates first ([`crate::validation::validate`]) and only
/// evaluates a clean input. This function does not re-validate: absent or
/// incomplete optional features are treated as disabled stages, which is the
/// correct permissive behavior for input that validation has already passed.
///
/// Pure and deterministic: same input, same `PricingResult`, no side
/// effects, no shared state between invocations.
pub fn evaluate(input: &PricingInput) -> PricingResult {
    let base = input.original_price.unwrap_or_default();
    let mut running = base;
    let mut breakdown = PriceBreakdown {
        base_price: base,
        ..PriceBreakdown::default()
    };

    // Stage 1: percentage discount off the running total.
    if let Some(rate) = input.discount_rate {
        if !rate.is_zero() {
            let discount = running.apply_rate(rate);
            running -= discount;
            breakdown.discount_amount = discount;
        }
    }

    // Stage 2: buy-X-get-Y. The quantity is how many whole items the
    // ORIGINAL base price covers (partial items round up) - the stage-1
    // discount does not shrink the purchase size.
    if let (Some(buy_x), Some(get_y), Some(item_price)) =
        (input.buy_x, input.get_y, input.item_price)
    {
        if buy_x >= 1 && get_y >= 1 && item_price.is_positive() {
            let quantity = base.ceil_div(item_price);
            // Saturating: validation bounds the counts only from below, so
            // an enormous get_y must peg at i64::MAX and fall to the min
            // cap below rather than wrap negative.
            let free_items = (quantity / buy_x).saturating_mul(get_y);
            // Capped at the remainder: free items can zero the total but
            // never push it negative.
            let free_value = Money::min(running, item_price.saturating_mul(free_items));
            running -= free_value;
            breakdown.promotion_amount = free_value;
        }
    }

    // Stage 3: fixed coupon, capped at the remainder.
    if input.use_coupon {
        if let Some(coupon) = input.coupon_value {
            if coupon.is_positive() {
                let applied = Money::min(running, coupon);
                running -= applied;
                breakdown.coupon_amount = applied;
            }
        }
    }

    // Stage 4: spend & save. The threshold is measured against the
    // ORIGINAL base price, not the discounted remainder.
    if let (Some(spend), Some(save)) = (input.spend_amount, input.save_amount) {
        if spend.is_positive() && save.is_positive() && base >= spend {
            let applied = Money::min(running, save);
            running -= applied;
            breakdown.spend_save_amount = applied;
        }
    }

    // Stage 5: shipping. Added after every discount; never discounted.
    let shipping = input.shipping_fee.unwrap_or_default();
    running += shipping;
    breakdown.shipping_fee = shipping;

    // Stage 6: tax on the post-shipping total - shipping is taxed too.
    if let Some(rate) = input.tax_rate {
        if !rate.is_zero() {
            let tax = running.apply_rate(rate);
            running += tax;
            breakdown.tax_amount = tax;
        }
    }

    // Stage 7: defensive floor. The per-stage caps make this unreachable,
    // but it guards the `final_price >= 0` contract outright.
    let final_price = running.clamp_non_negative();

    PricingResult {
        final_price,
        total_savings: total_savings(&breakdown),
        breakdown,
    }
}

/// Sums the discount-producing stages into one savings figure.
///
/// Shipping and tax are surcharges, not savings, and are excluded.
pub fn total_savings(breakdown: &PriceBreakdown) -> Money {
    breakdown.discount_amount
        + breakdown.promotion_amount
        + breakdown.coupon_amount
        + breakdown.spend_save_amount
}

// =============================================================================
// Unit Tests
// =============================================================================
