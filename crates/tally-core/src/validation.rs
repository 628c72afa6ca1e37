//! # Validation Module
//!
//! Input validation for the pricing engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form layer (tally-form)                                      │
//! │  ├── Numeric well-formedness ("abc" is not a price)                    │
//! │  └── Sign screening for unsigned types (a negative tax rate            │
//! │      cannot even be constructed)                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (typed rules)                                    │
//! │  ├── Required fields                                                   │
//! │  ├── Sign and range constraints                                        │
//! │  └── Grouped all-or-nothing features                                   │
//! │                                                                         │
//! │  Every rule is checked independently - validation never stops at       │
//! │  the first violation, so the caller can show all problems at once.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//! use tally_core::types::{Field, PricingInput};
//! use tally_core::validation::validate;
//!
//! let report = validate(&PricingInput::new(Money::from_cents(10000)));
//! assert!(report.is_valid());
//!
//! let report = validate(&PricingInput::default());
//! assert!(report.get(Field::OriginalPrice).is_some());
//! ```

use crate::error::{ValidationError, ValidationReport};
use crate::types::{Field, PricingInput, ONE_HUNDRED_PERCENT_BPS};

/// Checks every input rule and returns the complete report.
///
/// ## Rules
/// 1. `original_price` required and > 0
/// 2. `discount_rate`, if present, strictly below 100%
/// 3. `shipping_fee`, if present, >= 0
/// 4. `tax_rate`, if present, >= 0 (unsigned by construction, so nothing
///    representable can violate this - the form layer screens the sign)
/// 5. `coupon_value` required and > 0 when `use_coupon` is set
/// 6. `buy_x`/`get_y` all-or-nothing, both >= 1; a violation lands the
///    SAME error on both fields
/// 7. `item_price` required and > 0 whenever the promotion group is engaged
/// 8. `spend_amount`/`save_amount` all-or-nothing, both > 0, errors
///    duplicated likewise
///
/// Never panics; an empty report means valid.
pub fn validate(input: &PricingInput) -> ValidationReport {
    let mut report = ValidationReport::new();

    // Rule 1: the one genuinely required field.
    match input.original_price {
        None => report.insert(
            Field::OriginalPrice,
            ValidationError::Required {
                field: Field::OriginalPrice,
            },
        ),
        Some(price) if !price.is_positive() => report.insert(
            Field::OriginalPrice,
            ValidationError::MustBePositive {
                field: Field::OriginalPrice,
            },
        ),
        _ => {}
    }

    // Rule 2: a 100% discount is rejected, not clamped.
    if let Some(rate) = input.discount_rate {
        if rate.bps() >= ONE_HUNDRED_PERCENT_BPS {
            report.insert(
                Field::DiscountRate,
                ValidationError::RateTooHigh {
                    field: Field::DiscountRate,
                },
            );
        }
    }

    // Rule 3: shipping can be free but not negative.
    if let Some(fee) = input.shipping_fee {
        if fee.is_negative() {
            report.insert(
                Field::ShippingFee,
                ValidationError::MustBeNonNegative {
                    field: Field::ShippingFee,
                },
            );
        }
    }

    // Rule 4: tax_rate is u32 bps; no representable value is negative.

    // Rule 5: the coupon toggle demands a positive value.
    if input.use_coupon {
        match input.coupon_value {
            None => report.insert(
                Field::CouponValue,
                ValidationError::Required {
                    field: Field::CouponValue,
                },
            ),
            Some(value) if !value.is_positive() => report.insert(
                Field::CouponValue,
                ValidationError::MustBePositive {
                    field: Field::CouponValue,
                },
            ),
            _ => {}
        }
    }

    // Rules 6 + 7: the buy-X-get-Y group. Touching ANY of the three fields
    // engages the whole group.
    let promotion_engaged =
        input.buy_x.is_some() || input.get_y.is_some() || input.item_price.is_some();
    if promotion_engaged {
        let counts_ok = matches!(input.buy_x, Some(x) if x >= 1)
            && matches!(input.get_y, Some(y) if y >= 1);
        if !counts_ok {
            let error = ValidationError::GroupedTogether {
                first: Field::BuyX,
                second: Field::GetY,
            };
            report.insert(Field::BuyX, error.clone());
            report.insert(Field::GetY, error);
        }

        match input.item_price {
            None => report.insert(
                Field::ItemPrice,
                ValidationError::Required {
                    field: Field::ItemPrice,
                },
            ),
            Some(price) if !price.is_positive() => report.insert(
                Field::ItemPrice,
                ValidationError::MustBePositive {
                    field: Field::ItemPrice,
                },
            ),
            _ => {}
        }
    }

    // Rule 8: the spend & save group.
    if input.spend_amount.is_some() || input.save_amount.is_some() {
        let amounts_ok = matches!(input.spend_amount, Some(s) if s.is_positive())
            && matches!(input.save_amount, Some(s) if s.is_positive());
        if !amounts_ok {
            let error = ValidationError::GroupedTogether {
                first: Field::SpendAmount,
                second: Field::SaveAmount,
            };
            report.insert(Field::SpendAmount, error.clone());
            report.insert(Field::SaveAmount, error);
        }
    }

    report
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Rate;

    fn valid_base() -> PricingInput {
        PricingInput::new(Money::from_cents(10000))
    }

    #[test]
    fn test_minimal_valid_input() {
        assert!(validate(&valid_base()).is_valid());
    }

    #[test]
    fn test_original_price_required_and_positive() {
        let report = validate(&PricingInput::default());
        assert_eq!(
            report.get(Field::OriginalPrice),
            Some(&ValidationError::Required {
                field: Field::OriginalPrice
            })
        );

        let report = validate(&PricingInput::new(Money::zero()));
        assert_eq!(
            report.get(Field::OriginalPrice),
            Some(&ValidationError::MustBePositive {
                field: Field::OriginalPrice
            })
        );

        let report = validate(&PricingInput::new(Money::from_cents(-100)));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_discount_rate_range() {
        let ok = PricingInput {
            discount_rate: Some(Rate::from_bps(9999)), // 99.99%
            ..valid_base()
        };
        assert!(validate(&ok).is_valid());

        let too_high = PricingInput {
            discount_rate: Some(Rate::from_bps(10000)), // 100%
            ..valid_base()
        };
        assert_eq!(
            validate(&too_high).get(Field::DiscountRate),
            Some(&ValidationError::RateTooHigh {
                field: Field::DiscountRate
            })
        );

        // Absent discount is valid (stage disabled)
        assert!(validate(&valid_base()).is_valid());
    }

    #[test]
    fn test_shipping_fee_sign() {
        let free = PricingInput {
            shipping_fee: Some(Money::zero()),
            ..valid_base()
        };
        assert!(validate(&free).is_valid());

        let negative = PricingInput {
            shipping_fee: Some(Money::from_cents(-500)),
            ..valid_base()
        };
        assert_eq!(
            validate(&negative).get(Field::ShippingFee),
            Some(&ValidationError::MustBeNonNegative {
                field: Field::ShippingFee
            })
        );
    }

    #[test]
    fn test_coupon_requires_value_when_engaged() {
        let missing = PricingInput {
            use_coupon: true,
            ..valid_base()
        };
        assert_eq!(
            validate(&missing).get(Field::CouponValue),
            Some(&ValidationError::Required {
                field: Field::CouponValue
            })
        );

        let zero = PricingInput {
            use_coupon: true,
            coupon_value: Some(Money::zero()),
            ..valid_base()
        };
        assert!(!validate(&zero).is_valid());

        // A dangling value with the toggle off is simply ignored
        let toggled_off = PricingInput {
            coupon_value: Some(Money::from_cents(500)),
            ..valid_base()
        };
        assert!(validate(&toggled_off).is_valid());
    }

    #[test]
    fn test_promotion_partial_group_errors_both_fields() {
        let partial = PricingInput {
            buy_x: Some(2),
            ..valid_base()
        };
        let report = validate(&partial);

        let expected = ValidationError::GroupedTogether {
            first: Field::BuyX,
            second: Field::GetY,
        };
        // Same message, duplicated on both fields - never a silent partial
        assert_eq!(report.get(Field::BuyX), Some(&expected));
        assert_eq!(report.get(Field::GetY), Some(&expected));
        // Engaging the group also demands an item price
        assert_eq!(
            report.get(Field::ItemPrice),
            Some(&ValidationError::Required {
                field: Field::ItemPrice
            })
        );
    }

    #[test]
    fn test_promotion_zero_count_errors_both_fields() {
        let zero_count = PricingInput {
            buy_x: Some(0),
            get_y: Some(1),
            item_price: Some(Money::from_cents(2500)),
            ..valid_base()
        };
        let report = validate(&zero_count);
        assert!(report.get(Field::BuyX).is_some());
        assert!(report.get(Field::GetY).is_some());
        assert!(report.get(Field::ItemPrice).is_none());
    }

    #[test]
    fn test_promotion_full_group_is_valid() {
        let full = PricingInput {
            buy_x: Some(2),
            get_y: Some(1),
            item_price: Some(Money::from_cents(2500)),
            ..valid_base()
        };
        assert!(validate(&full).is_valid());
    }

    #[test]
    fn test_item_price_alone_engages_the_group() {
        let dangling = PricingInput {
            item_price: Some(Money::from_cents(2500)),
            ..valid_base()
        };
        let report = validate(&dangling);
        assert!(report.get(Field::BuyX).is_some());
        assert!(report.get(Field::GetY).is_some());
    }

    #[test]
    fn test_spend_save_group() {
        let partial = PricingInput {
            spend_amount: Some(Money::from_cents(5000)),
            ..valid_base()
        };
        let report = validate(&partial);
        let expected = ValidationError::GroupedTogether {
            first: Field::SpendAmount,
            second: Field::SaveAmount,
        };
        assert_eq!(report.get(Field::SpendAmount), Some(&expected));
        assert_eq!(report.get(Field::SaveAmount), Some(&expected));

        let full = PricingInput {
            spend_amount: Some(Money::from_cents(5000)),
            save_amount: Some(Money::from_cents(1000)),
            ..valid_base()
        };
        assert!(validate(&full).is_valid());
    }

    #[test]
    fn test_multiple_errors_reported_at_once() {
        let input = PricingInput {
            original_price: None,
            discount_rate: Some(Rate::from_bps(12000)),
            shipping_fee: Some(Money::from_cents(-1)),
            use_coupon: true,
            buy_x: Some(3),
            ..PricingInput::default()
        };
        let report = validate(&input);

        // originalPrice, discountRate, shippingFee, couponValue,
        // buyX, getY, itemPrice - all at once, no short-circuit
        assert_eq!(report.len(), 7);
    }
}
