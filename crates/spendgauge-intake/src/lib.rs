//! Spendgauge Intake - Event buffering and normalization
//!
//! This crate owns the write side of spendgauge:
//!
//! - **Event store**: the [`EventStore`] trait and its bounded in-memory
//!   implementation. The buffer is transient by design; it is a staging
//!   area for events awaiting a real persistence layer, not authoritative
//!   storage.
//! - **Normalizer**: the pure mapping from buffered [`RawEvent`]s to
//!   gauge-ready [`Transaction`](spendgauge_types::Transaction) records.
//! - **SMS parser**: best-effort extraction of amount, merchant and
//!   method from free-form bank SMS text.
//!
//! Intake never validates payloads. Whatever a webhook sender posts is
//! buffered verbatim and coerced into numbers at normalization time,
//! with unusable fields degrading to zero or `None`.

pub mod normalize;
pub mod parser;
pub mod store;

pub use normalize::normalize_for_gauge;
pub use parser::{parse_sms, ParsedSms};
pub use store::{EventStore, InMemoryEventStore, OverflowPolicy, StoreError, StoreResult};

use serde_json::Value;
use spendgauge_types::{EventSource, RawEvent};

/// Record an inbound webhook event
///
/// Wraps the payload with the source channel and the current time, then
/// appends it to the store. Accepts any payload shape; the only failure
/// mode is a full queue under [`OverflowPolicy::Reject`].
pub async fn record_event(
    store: &dyn EventStore,
    source: EventSource,
    payload: Value,
) -> StoreResult<()> {
    tracing::debug!(source = %source, "recording event");
    store.append(RawEvent::now(source, payload)).await
}
