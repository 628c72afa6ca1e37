//! # tally-form: Form Layer for the Tally Pricing Engine
//!
//! The engine in `tally-core` only accepts typed cents and basis points.
//! This crate is its external collaborator: it owns everything that sits
//! between a text-entry UI and the engine.
//!
//! ## Responsibilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         tally-form                                      │
//! │                                                                         │
//! │  ┌───────────┐   ┌───────────┐   ┌───────────┐                          │
//! │  │  fields   │   │  history  │   │ currency  │                          │
//! │  │ PriceForm │   │ last-10   │   │ code →    │                          │
//! │  │ raw text  │   │ results   │   │ symbol    │                          │
//! │  │ → typed   │   │ (FIFO)    │   │ (display) │                          │
//! │  └───────────┘   └───────────┘   └───────────┘                          │
//! │                                                                         │
//! │  plus the `quote` CLI binary as a reference front end                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calling convention mirrors the engine's: [`fields::PriceForm::validate`]
//! first, and [`fields::PriceForm::evaluate`] only on a clean report.

pub mod currency;
pub mod fields;
pub mod history;

pub use fields::PriceForm;
pub use history::{QuoteHistory, QuoteRecord, MAX_HISTORY_ENTRIES};
