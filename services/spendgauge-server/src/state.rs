//! Application state shared across handlers

use std::sync::Arc;

use spendgauge_intake::{EventStore, InMemoryEventStore};
use spendgauge_types::BudgetLimits;

/// Shared application state
pub struct AppState {
    /// Transient event buffer, injectable so a persistent backend can
    /// replace it without touching the handlers
    pub store: Arc<dyn EventStore>,
    /// Budget limits the gauge is computed against
    pub limits: BudgetLimits,
}

impl AppState {
    /// Create state over an explicit store
    pub fn new(store: Arc<dyn EventStore>, limits: BudgetLimits) -> Self {
        Self { store, limits }
    }

    /// Create state backed by a fresh in-memory store
    pub fn in_memory(limits: BudgetLimits) -> Self {
        Self::new(Arc::new(InMemoryEventStore::new()), limits)
    }
}
