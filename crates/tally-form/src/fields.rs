//! # Form Fields
//!
//! The raw-input side of the boundary: a price form holds every field as the
//! text the user typed, and this module turns that text into the engine's
//! typed [`PricingInput`] - or into per-field errors.
//!
//! ## Two Paths Through the Form
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       PriceForm Flow                                    │
//! │                                                                         │
//! │  Raw text fields ("100", "20", "abc", "")                               │
//! │       │                                                                 │
//! │       ├──► validate() ── parse errors ┐                                 │
//! │       │                               ├──► merged ValidationReport      │
//! │       │         engine rule errors ───┘    (every problem at once)      │
//! │       │                                                                 │
//! │       └──► evaluate() ── permissive re-parse: a malformed OPTIONAL      │
//! │                          field is a disabled stage, matching the        │
//! │                          engine's trust-the-caller contract             │
//! │                                                                         │
//! │  Callers run validate() first and only evaluate() on a clean form.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsing is exact decimal fixed-point: digits on either side of one `.`,
//! the third fractional digit rounding half-up into cents. No value ever
//! takes a detour through binary floating point.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tally_core::error::{ValidationError, ValidationReport};
use tally_core::money::Money;
use tally_core::types::{Field, PricingInput, Rate};
use tally_core::{evaluate, validate, PricingResult};

// =============================================================================
// Price Form
// =============================================================================

/// A pricing form exactly as a UI holds it: all text, plus one checkbox.
///
/// Empty (or whitespace-only) text means the field was left blank, which
/// disables the corresponding stage; it is never a parse error on its own.
///
/// ## Example
/// ```rust
/// use tally_form::fields::PriceForm;
/// use tally_core::Money;
///
/// let form = PriceForm {
///     original_price: "100".into(),
///     discount_rate: "20".into(),
///     ..PriceForm::default()
/// };
///
/// assert!(form.validate().is_valid());
/// assert_eq!(form.evaluate().final_price, Money::from_cents(8000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PriceForm {
    pub original_price: String,
    pub discount_rate: String,
    pub shipping_fee: String,
    pub tax_rate: String,
    pub use_coupon: bool,
    pub coupon_value: String,
    pub buy_x: String,
    pub get_y: String,
    pub item_price: String,
    pub spend_amount: String,
    pub save_amount: String,
}

impl PriceForm {
    /// Parses every field, reporting malformed numbers per field and
    /// leaving those fields absent on the returned input.
    pub fn to_input(&self) -> (PricingInput, ValidationReport) {
        let mut report = ValidationReport::new();

        let input = PricingInput {
            original_price: money_field(&self.original_price, Field::OriginalPrice, &mut report),
            discount_rate: rate_field(&self.discount_rate, Field::DiscountRate, &mut report),
            shipping_fee: money_field(&self.shipping_fee, Field::ShippingFee, &mut report),
            tax_rate: rate_field(&self.tax_rate, Field::TaxRate, &mut report),
            use_coupon: self.use_coupon,
            coupon_value: money_field(&self.coupon_value, Field::CouponValue, &mut report),
            buy_x: count_field(&self.buy_x, Field::BuyX, &mut report),
            get_y: count_field(&self.get_y, Field::GetY, &mut report),
            item_price: money_field(&self.item_price, Field::ItemPrice, &mut report),
            spend_amount: money_field(&self.spend_amount, Field::SpendAmount, &mut report),
            save_amount: money_field(&self.save_amount, Field::SaveAmount, &mut report),
        };

        (input, report)
    }

    /// Full validation: parse errors merged with the engine's rules, so a
    /// caller can surface every problem in one round trip.
    ///
    /// A field's parse error takes precedence over any rule error the
    /// resulting absence would otherwise trigger.
    pub fn validate(&self) -> ValidationReport {
        let (input, mut report) = self.to_input();
        report.merge(validate(&input));
        report
    }

    /// Runs the pipeline, re-parsing the raw fields permissively.
    ///
    /// Precondition: [`PriceForm::validate`] returned a clean report.
    /// Invoked on an invalid form anyway, malformed or missing optional
    /// fields behave as disabled stages - the engine's own contract.
    pub fn evaluate(&self) -> PricingResult {
        let (input, _) = self.to_input();
        evaluate(&input)
    }
}

// =============================================================================
// Field Parsers
// =============================================================================

fn money_field(raw: &str, field: Field, report: &mut ValidationReport) -> Option<Money> {
    typed_field(raw, field, report, parse_money)
}

fn rate_field(raw: &str, field: Field, report: &mut ValidationReport) -> Option<Rate> {
    typed_field(raw, field, report, parse_rate)
}

fn count_field(raw: &str, field: Field, report: &mut ValidationReport) -> Option<i64> {
    typed_field(raw, field, report, parse_count)
}

fn typed_field<T>(
    raw: &str,
    field: Field,
    report: &mut ValidationReport,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match parse(raw) {
        Some(value) => Some(value),
        None => {
            report.insert(field, ValidationError::NotANumber { field });
            None
        }
    }
}

/// Parses a decimal string into exact hundredths (cents or percent-bps).
///
/// Accepts an optional leading `-`, digits, and at most one `.`. The third
/// fractional digit rounds half-up; anything else is rejected. Overflow is
/// a parse failure, not a panic.
fn parse_hundredths(raw: &str) -> Option<i64> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    let mut parts = digits.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next().unwrap_or("");

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let int_value: i64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };

    let mut frac = frac_part.bytes().map(|b| i64::from(b - b'0'));
    let tenths = frac.next().unwrap_or(0);
    let hundredth = frac.next().unwrap_or(0);
    let round_up = frac.next().is_some_and(|d| d >= 5);

    let mut hundredths = int_value
        .checked_mul(100)?
        .checked_add(tenths * 10 + hundredth)?;
    if round_up {
        hundredths = hundredths.checked_add(1)?;
    }

    Some(if negative { -hundredths } else { hundredths })
}

/// "10.99" → $10.99 in cents.
fn parse_money(raw: &str) -> Option<Money> {
    parse_hundredths(raw).map(Money::from_cents)
}

/// "8.25" (percent) → 825 bps. Negative rates cannot exist as a [`Rate`],
/// so the sign is rejected here at the boundary.
fn parse_rate(raw: &str) -> Option<Rate> {
    let hundredths = parse_hundredths(raw)?;
    u32::try_from(hundredths).ok().map(Rate::from_bps)
}

/// A whole-item count: plain integer, optional sign.
///
/// Fractional counts ("2.5") are rejected as not-a-number on purpose. The
/// promotion deals in whole items, so the boundary refuses a fraction
/// outright instead of silently flooring it the way a parse-as-decimal
/// form would.
fn parse_count(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hundredths_shapes() {
        assert_eq!(parse_hundredths("100"), Some(10000));
        assert_eq!(parse_hundredths("10.99"), Some(1099));
        assert_eq!(parse_hundredths(".5"), Some(50));
        assert_eq!(parse_hundredths("5."), Some(500));
        assert_eq!(parse_hundredths("-5.50"), Some(-550));
        assert_eq!(parse_hundredths("0"), Some(0));

        // Third fractional digit rounds half-up
        assert_eq!(parse_hundredths("1.005"), Some(101));
        assert_eq!(parse_hundredths("1.004"), Some(100));

        assert_eq!(parse_hundredths(""), None);
        assert_eq!(parse_hundredths("-"), None);
        assert_eq!(parse_hundredths("abc"), None);
        assert_eq!(parse_hundredths("1.2.3"), None);
        assert_eq!(parse_hundredths("1e3"), None);
        assert_eq!(parse_hundredths("99999999999999999999"), None); // overflow
    }

    #[test]
    fn test_parse_rate_rejects_negative() {
        assert_eq!(parse_rate("8.25"), Some(Rate::from_bps(825)));
        assert_eq!(parse_rate("0"), Some(Rate::zero()));
        assert_eq!(parse_rate("-5"), None);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count("-3"), Some(-3)); // sign rejection is a rule, not a parse failure
        assert_eq!(parse_count("2.5"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn test_blank_fields_are_absent_not_errors() {
        let form = PriceForm {
            original_price: "100".into(),
            discount_rate: "   ".into(),
            ..PriceForm::default()
        };
        let (input, report) = form.to_input();
        assert!(report.is_valid());
        assert_eq!(input.discount_rate, None);
        assert_eq!(input.original_price, Some(Money::from_cents(10000)));
    }

    #[test]
    fn test_malformed_field_reports_not_a_number() {
        let form = PriceForm {
            original_price: "ten dollars".into(),
            ..PriceForm::default()
        };
        let report = form.validate();
        assert_eq!(
            report.get(Field::OriginalPrice),
            Some(&ValidationError::NotANumber {
                field: Field::OriginalPrice
            })
        );
    }

    #[test]
    fn test_validate_merges_parse_and_rule_errors() {
        let form = PriceForm {
            original_price: "abc".into(), // parse error
            discount_rate: "150".into(),  // rule error (>= 100%)
            buy_x: "2".into(),            // rule error (partial group)
            ..PriceForm::default()
        };
        let report = form.validate();

        assert!(report.get(Field::OriginalPrice).is_some());
        assert_eq!(
            report.get(Field::DiscountRate),
            Some(&ValidationError::RateTooHigh {
                field: Field::DiscountRate
            })
        );
        assert!(report.get(Field::BuyX).is_some());
        assert!(report.get(Field::GetY).is_some());
        assert!(report.get(Field::ItemPrice).is_some());
    }

    #[test]
    fn test_evaluate_matches_engine_scenario() {
        // $100 + $10 shipping, 10% tax on the shipped total → $121.00
        let form = PriceForm {
            original_price: "100".into(),
            shipping_fee: "10".into(),
            tax_rate: "10".into(),
            ..PriceForm::default()
        };
        assert!(form.validate().is_valid());

        let result = form.evaluate();
        assert_eq!(result.final_price, Money::from_cents(12100));
        assert_eq!(result.breakdown.tax_amount, Money::from_cents(1100));
        assert_eq!(result.total_savings, Money::zero());
    }

    #[test]
    fn test_evaluate_is_permissive_about_malformed_optionals() {
        let form = PriceForm {
            original_price: "50".into(),
            discount_rate: "oops".into(), // disabled, not fatal
            ..PriceForm::default()
        };
        let result = form.evaluate();
        assert_eq!(result.final_price, Money::from_cents(5000));
    }

    #[test]
    fn test_form_deserializes_camel_case() {
        let form: PriceForm = serde_json::from_str(
            r#"{"originalPrice":"100","useCoupon":true,"couponValue":"5"}"#,
        )
        .unwrap();
        assert!(form.use_coupon);
        assert_eq!(form.original_price, "100");
        assert!(form.validate().is_valid());
        assert_eq!(form.evaluate().final_price, Money::from_cents(9500));
    }
}
