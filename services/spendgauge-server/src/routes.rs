//! Router assembly

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Build the application router with all middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        // Event intake
        .route("/webhook/sms", post(handlers::webhook_sms))
        .route("/webhook/upi", post(handlers::webhook_upi))
        .route("/webhook/receipt", post(handlers::webhook_receipt))
        // Gauge reads
        .route("/budget/gauge", get(handlers::budget_gauge))
        .route("/budget/transactions", get(handlers::budget_transactions))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
