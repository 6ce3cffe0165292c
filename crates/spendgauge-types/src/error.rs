//! Error types for spendgauge
//!
//! The error surface is deliberately small: malformed payload fields
//! degrade to zero-valued transactions instead of failing, so only
//! genuinely unrecoverable conditions appear here.

use thiserror::Error;

/// Result type for spendgauge operations
pub type Result<T> = std::result::Result<T, SpendgaugeError>;

/// Spendgauge error types
#[derive(Debug, Clone, Error)]
pub enum SpendgaugeError {
    /// An event source string that is not one of sms/upi/receipt
    #[error("Unknown event source: {0}")]
    UnknownEventSource(String),
}
