//! Raw event types
//!
//! A [`RawEvent`] is an inbound financial-activity notification exactly as
//! it arrived: a source channel, an opaque JSON payload and a receipt
//! timestamp. Events are immutable once created; their identity is their
//! insertion order in the event store.

use crate::SpendgaugeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Channel through which a financial-activity notification arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    /// Bank SMS alert
    Sms,
    /// UPI transaction notification
    Upi,
    /// Scanned receipt webhook
    Receipt,
}

impl EventSource {
    /// All known sources, in webhook route order
    pub const ALL: [EventSource; 3] = [Self::Sms, Self::Upi, Self::Receipt];

    /// The lowercase wire name, as used in webhook paths
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Upi => "upi",
            Self::Receipt => "receipt",
        }
    }
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventSource {
    type Err = SpendgaugeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sms" => Ok(Self::Sms),
            "upi" => Ok(Self::Upi),
            "receipt" => Ok(Self::Receipt),
            other => Err(SpendgaugeError::UnknownEventSource(other.to_string())),
        }
    }
}

/// An inbound notification, held verbatim until normalization
///
/// The payload is never validated at intake; whatever shape the sender
/// posts is buffered as-is and coerced later by the normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    /// Which channel delivered the event
    pub source: EventSource,
    /// Opaque sender payload
    pub payload: serde_json::Value,
    /// When the event was received
    pub received_at: DateTime<Utc>,
}

impl RawEvent {
    /// Create an event received now
    pub fn now(source: EventSource, payload: serde_json::Value) -> Self {
        Self {
            source,
            payload,
            received_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_round_trip() {
        for source in EventSource::ALL {
            assert_eq!(source.as_str().parse::<EventSource>().unwrap(), source);
        }
    }

    #[test]
    fn test_source_parse_is_case_insensitive() {
        assert_eq!("UPI".parse::<EventSource>().unwrap(), EventSource::Upi);
    }

    #[test]
    fn test_source_parse_rejects_unknown() {
        assert!("email".parse::<EventSource>().is_err());
    }

    #[test]
    fn test_source_serializes_lowercase() {
        let json = serde_json::to_string(&EventSource::Receipt).unwrap();
        assert_eq!(json, "\"receipt\"");
    }
}
