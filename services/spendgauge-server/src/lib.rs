//! Spendgauge Server - HTTP surface for intake and gauge reads
//!
//! Routes:
//!
//! ```text
//! GET  /health               - liveness probe
//! POST /webhook/sms          - enqueue an SMS alert event
//! POST /webhook/upi          - enqueue a UPI notification event
//! POST /webhook/receipt      - enqueue a receipt scan event
//! GET  /budget/gauge         - computed budget gauge
//! GET  /budget/transactions  - normalized view of buffered events
//! ```
//!
//! Webhook bodies are arbitrary JSON and are never validated; malformed
//! JSON is rejected with 400 by the extractor, everything else is
//! buffered as-is. Gauge reads snapshot the store and never block
//! writers.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
