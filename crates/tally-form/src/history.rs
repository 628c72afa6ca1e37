//! # Calculation History
//!
//! A bounded, caller-side buffer of recent pricing results.
//!
//! The engine itself is stateless; remembering what was calculated is the
//! form layer's job. The buffer keeps the last [`MAX_HISTORY_ENTRIES`]
//! results, newest first, in memory only - persisting history across
//! restarts is deliberately out of scope.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_core::PricingResult;

/// How many past calculations the history retains.
pub const MAX_HISTORY_ENTRIES: usize = 10;

// =============================================================================
// Quote Record
// =============================================================================

/// One remembered calculation.
///
/// The currency code is a display label only (see [`crate::currency`]);
/// it never rescales the amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    /// The full engine output, frozen at calculation time.
    pub result: PricingResult,

    /// Display currency code, e.g. "USD".
    pub currency: String,

    /// When the calculation ran.
    pub calculated_at: DateTime<Utc>,
}

// =============================================================================
// Quote History
// =============================================================================

/// Bounded FIFO of recent calculations, newest first.
///
/// ## Example
/// ```rust
/// use tally_core::{evaluate, Money, PricingInput};
/// use tally_form::history::QuoteHistory;
///
/// let mut history = QuoteHistory::new();
/// let result = evaluate(&PricingInput::new(Money::from_cents(10000)));
///
/// history.record(result, "USD");
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.latest().unwrap().result, result);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteHistory {
    entries: VecDeque<QuoteRecord>,
}

impl QuoteHistory {
    /// An empty history.
    pub fn new() -> Self {
        QuoteHistory::default()
    }

    /// Remembers a result, evicting the oldest entry beyond capacity.
    pub fn record(&mut self, result: PricingResult, currency: &str) {
        self.entries.push_front(QuoteRecord {
            result,
            currency: currency.to_string(),
            calculated_at: Utc::now(),
        });
        self.entries.truncate(MAX_HISTORY_ENTRIES);
    }

    /// The most recent calculation, if any.
    pub fn latest(&self) -> Option<&QuoteRecord> {
        self.entries.front()
    }

    /// Iterates newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &QuoteRecord> {
        self.entries.iter()
    }

    /// Number of remembered calculations (at most the capacity).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
