//! Transient event store
//!
//! The store is the single shared mutable piece of spendgauge. Appends
//! come from concurrent webhook handlers, reads take a snapshot copy, so
//! all access goes through an async lock. The trait is the seam where a
//! persistent backend would plug in without touching callers.

use std::collections::VecDeque;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use spendgauge_types::RawEvent;

/// Default capacity of the in-memory event buffer
pub const DEFAULT_CAPACITY: usize = 1024;

/// Event store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The buffer is full and the overflow policy rejects new events
    #[error("Event queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// What to do with a new event when the buffer is at capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Evict the oldest buffered event to make room
    #[default]
    DropOldest,
    /// Refuse the new event with [`StoreError::QueueFull`]
    Reject,
}

/// Storage backend for raw events
///
/// Implementations must be safe to share across request handlers.
/// `snapshot` returns a copy; readers never hold the lock while the
/// gauge is computed.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append an event, subject to the backend's overflow policy
    async fn append(&self, event: RawEvent) -> StoreResult<()>;

    /// Copy out all buffered events in insertion order
    async fn snapshot(&self) -> Vec<RawEvent>;

    /// Drop all buffered events
    async fn clear(&self);

    /// Number of buffered events
    async fn len(&self) -> usize;

    /// Whether the buffer is empty
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Bounded in-memory event buffer
pub struct InMemoryEventStore {
    events: RwLock<VecDeque<RawEvent>>,
    capacity: usize,
    policy: OverflowPolicy,
}

impl InMemoryEventStore {
    /// Create a store with the default capacity and drop-oldest overflow
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, OverflowPolicy::default())
    }

    /// Create a store with an explicit capacity and overflow policy
    ///
    /// Capacity is floored at 1 so the buffer can always hold the event
    /// being appended.
    pub fn with_capacity(capacity: usize, policy: OverflowPolicy) -> Self {
        Self {
            events: RwLock::new(VecDeque::new()),
            capacity: capacity.max(1),
            policy,
        }
    }

    /// The configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(&self, event: RawEvent) -> StoreResult<()> {
        let mut events = self.events.write().await;
        if events.len() >= self.capacity {
            match self.policy {
                OverflowPolicy::DropOldest => {
                    events.pop_front();
                    tracing::warn!(
                        capacity = self.capacity,
                        "event buffer full, evicting oldest event"
                    );
                }
                OverflowPolicy::Reject => {
                    return Err(StoreError::QueueFull {
                        capacity: self.capacity,
                    });
                }
            }
        }
        events.push_back(event);
        Ok(())
    }

    async fn snapshot(&self) -> Vec<RawEvent> {
        self.events.read().await.iter().cloned().collect()
    }

    async fn clear(&self) {
        self.events.write().await.clear();
    }

    async fn len(&self) -> usize {
        self.events.read().await.len()
    }
}
