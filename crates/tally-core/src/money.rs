//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  The original of this engine papered over it by rounding on            │
//! │  (x + Number.EPSILON) at every stage.                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every stage works in whole cents, rounding is exact half-up,        │
//! │    and no epsilon correction is ever needed.                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;            // $21.98
//! let total = price + Money::from_cents(500); // $15.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediates (e.g. an over-applied
///   coupon before the final clamp) without silent wraparound
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// Every monetary value in the pricing pipeline flows through this type:
/// the base price, each stage's delta, shipping, tax, and the final price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the smaller of two Money values.
    ///
    /// Used by the pipeline's per-stage caps: a coupon or rebate can never
    /// take more than what remains of the running total.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let remaining = Money::from_cents(5000);
    /// let coupon = Money::from_cents(10000);
    /// assert_eq!(Money::min(remaining, coupon).cents(), 5000);
    /// ```
    #[inline]
    pub fn min(a: Money, b: Money) -> Money {
        Money(a.0.min(b.0))
    }

    /// Clamps the value at zero from below.
    ///
    /// The pipeline's final defensive floor: per-stage caps already prevent
    /// a negative total, so this is normally a no-op.
    #[inline]
    pub const fn clamp_non_negative(&self) -> Money {
        if self.0 < 0 {
            Money(0)
        } else {
            Money(self.0)
        }
    }

    /// Applies a rate (in basis points) and returns the resulting amount,
    /// rounded half-up to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math: `(cents * bps + 5000) / 10000`
    /// The +5000 provides half-up rounding (5000/10000 = 0.5), exactly.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::types::Rate;
    ///
    /// let total = Money::from_cents(1000); // $10.00
    /// let rate = Rate::from_bps(825);      // 8.25%
    ///
    /// // $10.00 × 8.25% = $0.825 → rounds to $0.83 (83 cents)
    /// assert_eq!(total.apply_rate(rate).cents(), 83);
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        // i128 prevents overflow on large amounts
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Multiplies by an item count, saturating at the i64 bounds instead
    /// of wrapping.
    ///
    /// The promotion stage multiplies a unit price by a free-item count
    /// that validation only bounds from below; saturation keeps an absurd
    /// count from wrapping negative, so the stage's `min(running, value)`
    /// cap still lands on the running total.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit = Money::from_cents(2500);
    /// assert_eq!(unit.saturating_mul(2).cents(), 5000);
    /// assert_eq!(unit.saturating_mul(i64::MAX).cents(), i64::MAX);
    /// ```
    #[inline]
    pub const fn saturating_mul(&self, qty: i64) -> Money {
        Money(self.0.saturating_mul(qty))
    }

    /// Divides by another Money value, rounding up.
    ///
    /// Answers "how many whole items at `unit_price` does this amount
    /// cover?" for the buy-X-get-Y promotion. A partial item counts as one.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let base = Money::from_cents(10000);      // $100.00
    /// let unit = Money::from_cents(2500);       // $25.00
    /// assert_eq!(base.ceil_div(unit), 4);
    ///
    /// let odd = Money::from_cents(3000);        // $30.00
    /// assert_eq!(base.ceil_div(odd), 4);        // ceil(3.33) = 4
    /// ```
    ///
    /// ## Panics
    /// Never: a non-positive divisor yields 0 instead of dividing.
    pub const fn ceil_div(&self, unit_price: Money) -> i64 {
        if unit_price.0 <= 0 || self.0 <= 0 {
            return 0;
        }
        (self.0 + unit_price.0 - 1) / unit_price.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (item counts).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_apply_rate_exact() {
        // $100.00 at 20% = $20.00, no rounding involved
        let amount = Money::from_cents(10000);
        assert_eq!(amount.apply_rate(Rate::from_bps(2000)).cents(), 2000);
    }

    #[test]
    fn test_apply_rate_rounds_half_up() {
        // $10.00 at 8.25% = $0.825 → $0.83
        let amount = Money::from_cents(1000);
        assert_eq!(amount.apply_rate(Rate::from_bps(825)).cents(), 83);

        // $0.01 at 50% = $0.005 → rounds up to $0.01
        let penny = Money::from_cents(1);
        assert_eq!(penny.apply_rate(Rate::from_bps(5000)).cents(), 1);
    }

    #[test]
    fn test_apply_rate_large_amount_no_overflow() {
        // cents * bps exceeds i64::MAX here; only the i128 widening in
        // apply_rate keeps this from wrapping
        let amount = Money::from_cents(200_000_000_000_000_000);
        assert_eq!(
            amount.apply_rate(Rate::from_bps(825)).cents(),
            16_500_000_000_000_000
        );
    }

    #[test]
    fn test_saturating_mul() {
        let unit = Money::from_cents(2500);
        assert_eq!(unit.saturating_mul(4).cents(), 10000);
        assert_eq!(unit.saturating_mul(0).cents(), 0);
        assert_eq!(unit.saturating_mul(i64::MAX).cents(), i64::MAX);
        assert_eq!(
            Money::from_cents(-1).saturating_mul(i64::MAX).cents(),
            i64::MIN + 1
        );
    }

    #[test]
    fn test_ceil_div() {
        let base = Money::from_cents(10000);
        assert_eq!(base.ceil_div(Money::from_cents(2500)), 4); // exact
        assert_eq!(base.ceil_div(Money::from_cents(3000)), 4); // ceil(3.33)
        assert_eq!(base.ceil_div(Money::from_cents(10001)), 1); // partial item
        assert_eq!(base.ceil_div(Money::zero()), 0); // guarded
        assert_eq!(Money::zero().ceil_div(Money::from_cents(100)), 0);
    }

    #[test]
    fn test_min_and_clamp() {
        let a = Money::from_cents(5000);
        let b = Money::from_cents(10000);
        assert_eq!(Money::min(a, b), a);
        assert_eq!(Money::min(b, a), a);

        assert_eq!(Money::from_cents(-250).clamp_non_negative(), Money::zero());
        assert_eq!(a.clamp_non_negative(), a);
    }
}
