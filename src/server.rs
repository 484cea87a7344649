use crate::error::ApiError;
use crate::model::{PointsResponse, ProcessResponse, Receipt, ReceiptId};
use crate::scoring;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;

/// Assembles the HTTP surface: submit a receipt, query its points.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(receipt_points))
        .with_state(state)
}

/// POST /receipts/process
///
/// Stores a structurally valid receipt and returns its generated id. Any
/// body that does not deserialize into a receipt is answered with 400.
async fn process_receipt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload?;
    let id = state.put(receipt);
    tracing::info!(id = %id, stored = state.stats().stored, "receipt stored");
    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/{id}/points
///
/// Looks up the stored receipt and scores it on the fly. Scoring is
/// deterministic and the stored receipt immutable, so repeated queries
/// return the same total.
async fn receipt_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ReceiptId>,
) -> Result<Json<PointsResponse>, ApiError> {
    let receipt = state.get(&id).ok_or_else(|| {
        tracing::debug!(id = %id, "unknown receipt id");
        ApiError::ReceiptNotFound
    })?;

    let points = scoring::score(&receipt);
    tracing::debug!(id = %id, points, "receipt scored");
    Ok(Json(PointsResponse { points }))
}
