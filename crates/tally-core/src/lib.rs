//! # tally-core: Pure Pricing Engine
//!
//! This crate is the **heart** of Tally. It computes a final purchase price
//! from a base price pushed through a fixed-order pipeline of optional
//! discount and surcharge stages, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Front end (form UI, CLI, HTTP handler)            │   │
//! │  │        raw text fields in ──► structured result out             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tally-form (form layer)                      │   │
//! │  │    string → Money/Rate parsing, history buffer, currency        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │ pipeline  │  │ validation│   │   │
//! │  │   │  Input    │  │   Money   │  │  stages   │  │   rules   │   │   │
//! │  │   │  Result   │  │   Rate    │  │  savings  │  │   report  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Input/output types ([`PricingInput`], [`PricingResult`], ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types and the per-field report
//! - [`validation`] - Input rules, all checked at once
//! - [`pipeline`] - The fixed-order evaluator and savings aggregator
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64), all rates in
//!    basis points (u32), so rounding is exact half-up with no float epsilon
//! 4. **Validate-then-evaluate**: [`validation::validate`] reports every
//!    violated rule in one pass; [`pipeline::evaluate`] trusts its caller and
//!    treats anything incomplete as a disabled stage
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::money::Money;
//! use tally_core::pipeline::evaluate;
//! use tally_core::types::{PricingInput, Rate};
//! use tally_core::validation::validate;
//!
//! let input = PricingInput {
//!     discount_rate: Some(Rate::from_bps(2000)), // 20% off
//!     shipping_fee: Some(Money::from_cents(500)),
//!     ..PricingInput::new(Money::from_cents(10000))
//! };
//!
//! // Callers always validate first and only evaluate a clean input.
//! assert!(validate(&input).is_valid());
//!
//! let result = evaluate(&input);
//! assert_eq!(result.final_price, Money::from_cents(8500));
//! assert_eq!(result.total_savings, Money::from_cents(2000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pipeline;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use error::{ValidationError, ValidationReport};
pub use money::Money;
pub use pipeline::{evaluate, total_savings};
pub use types::*;
pub use validation::validate;
