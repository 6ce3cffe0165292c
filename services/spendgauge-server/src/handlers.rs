//! Request handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use spendgauge_gauge::compute_gauge;
use spendgauge_intake::{normalize_for_gauge, record_event};
use spendgauge_types::{EventSource, GaugeResult, Transaction};

use crate::error::ApiResult;
use crate::state::AppState;

/// Default number of records returned by the transactions view
const DEFAULT_TRANSACTIONS_LIMIT: usize = 50;

/// Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

pub async fn webhook_sms(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    enqueue(&state, EventSource::Sms, payload).await
}

pub async fn webhook_upi(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    enqueue(&state, EventSource::Upi, payload).await
}

pub async fn webhook_receipt(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    enqueue(&state, EventSource::Receipt, payload).await
}

/// Append one webhook event and acknowledge with 202
async fn enqueue(
    state: &AppState,
    source: EventSource,
    payload: Value,
) -> ApiResult<(StatusCode, Json<Value>)> {
    record_event(state.store.as_ref(), source, payload).await?;
    let count = state.store.len().await;
    tracing::info!(source = %source, count, "event queued");
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "queued": true, "count": count })),
    ))
}

/// Compute the budget gauge over a snapshot of the buffered events
pub async fn budget_gauge(State(state): State<Arc<AppState>>) -> Json<GaugeResult> {
    let events = state.store.snapshot().await;
    let transactions = normalize_for_gauge(&events);
    Json(compute_gauge(&transactions, &state.limits))
}

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    /// Maximum number of records to return, most recent first kept
    pub limit: Option<usize>,
}

/// Normalized view of the buffered events, insertion order preserved
pub async fn budget_transactions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TransactionsQuery>,
) -> Json<Value> {
    let events = state.store.snapshot().await;
    let transactions = normalize_for_gauge(&events);

    let limit = query.limit.unwrap_or(DEFAULT_TRANSACTIONS_LIMIT);
    let skip = transactions.len().saturating_sub(limit);
    let recent: Vec<&Transaction> = transactions[skip..].iter().collect();

    Json(json!({
        "transactions": recent,
        "count": recent.len(),
    }))
}
