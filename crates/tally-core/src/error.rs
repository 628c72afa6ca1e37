//! # Error Types
//!
//! Validation errors for the pricing engine.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  tally-form parse errors  ──┐                                           │
//! │  (NotANumber per field)     ├──► ValidationReport ──► UI shows every    │
//! │  tally-core rule errors   ──┘    (Field → error)      problem at once   │
//! │  (required/sign/range/group)                                            │
//! │                                                                         │
//! │  The evaluator itself has NO error path: it only runs on input the      │
//! │  caller has already validated, and treats anything malformed as a       │
//! │  disabled stage.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants carrying the offending [`Field`], never bare
//!    strings
//! 3. Validation never panics and never stops at the first problem

use std::collections::BTreeMap;

use thiserror::Error;

use crate::types::Field;

// =============================================================================
// Validation Error
// =============================================================================

/// A single violated input rule, tied to the field it was found on.
///
/// `NotANumber` can only originate in the form layer (the engine's typed
/// input cannot hold a malformed number), but it belongs to the same
/// taxonomy so callers handle one error type end to end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: Field },

    /// Field did not parse as a number (raised by the form layer).
    #[error("{field} must be a number")]
    NotANumber { field: Field },

    /// Value must be strictly greater than zero.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: Field },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: Field },

    /// A discount percentage of 100% or more.
    #[error("{field} must be below 100%")]
    RateTooHigh { field: Field },

    /// A grouped feature was only partially specified (or a member was not
    /// positive). The same value is recorded on every member field.
    #[error("{first} and {second} must be provided together and be greater than zero")]
    GroupedTogether { first: Field, second: Field },
}

// =============================================================================
// Validation Report
// =============================================================================

/// The complete set of violated rules, one entry per offending field.
///
/// An empty report means the input is valid. `BTreeMap` keeps iteration in
/// declaration order of [`Field`], so error listings are deterministic.
///
/// ## Example
/// ```rust
/// use tally_core::error::{ValidationError, ValidationReport};
/// use tally_core::types::Field;
///
/// let mut report = ValidationReport::new();
/// assert!(report.is_valid());
///
/// report.insert(
///     Field::OriginalPrice,
///     ValidationError::Required { field: Field::OriginalPrice },
/// );
/// assert!(!report.is_valid());
/// assert_eq!(
///     report.message(Field::OriginalPrice),
///     Some("originalPrice is required".to_string()),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationReport {
    /// An empty (valid) report.
    pub fn new() -> Self {
        ValidationReport::default()
    }

    /// Records an error against a field. The first error on a field wins;
    /// later rules do not overwrite it.
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.errors.entry(field).or_insert(error);
    }

    /// True when no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when the report holds no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error recorded on a field, if any.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// The user-facing message for a field, if any.
    pub fn message(&self, field: Field) -> Option<String> {
        self.errors.get(&field).map(|e| e.to_string())
    }

    /// Iterates over `(field, error)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.errors.iter().map(|(f, e)| (*f, e))
    }

    /// Folds another report into this one (first error per field wins).
    pub fn merge(&mut self, other: ValidationReport) {
        for (field, error) in other.errors {
            self.insert(field, error);
        }
    }

    /// Renders the report as a field → message map, the shape a form UI
    /// binds error labels to.
    pub fn to_messages(&self) -> BTreeMap<Field, String> {
        self.errors
            .iter()
            .map(|(f, e)| (*f, e.to_string()))
            .collect()
    }

    /// Converts to the conventional `Result` shape: `Ok(())` when valid.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
