//! Normalized transaction records
//!
//! A [`Transaction`] is the gauge-facing view of a raw event: merchant,
//! method and a numeric amount pulled out of the opaque payload. Records
//! are created by the normalizer and never mutated afterwards.

use crate::EventSource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized spend record derived from a [`crate::RawEvent`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The channel the originating event arrived on
    pub source: EventSource,
    /// Merchant name, when the payload carried one
    pub merchant: Option<String>,
    /// Spend amount; missing or unparseable payload amounts coerce to 0
    pub amount: f64,
    /// Payment method, when the payload carried one
    pub method: Option<String>,
    /// Receipt time of the originating event
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// A zero-amount transaction with no merchant or method
    pub fn empty(source: EventSource, timestamp: DateTime<Utc>) -> Self {
        Self {
            source,
            merchant: None,
            amount: 0.0,
            method: None,
            timestamp,
        }
    }
}
