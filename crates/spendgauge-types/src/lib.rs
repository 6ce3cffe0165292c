//! Spendgauge Types - Canonical domain types for budget tracking
//!
//! This crate contains all foundational types for spendgauge with zero
//! dependencies on other spendgauge crates:
//!
//! - Event types (EventSource, RawEvent)
//! - Normalized transaction records
//! - Budget limits and the gauge result / status classification
//!
//! # Data Flow
//!
//! ```text
//! Webhook → RawEvent → Transaction → GaugeResult
//! ```
//!
//! Raw events are opaque at intake; normalization into [`Transaction`]
//! records and the gauge computation live in the `spendgauge-intake`
//! and `spendgauge-gauge` crates respectively.

pub mod budget;
pub mod error;
pub mod event;
pub mod transaction;

pub use budget::*;
pub use error::*;
pub use event::*;
pub use transaction::*;
