//! HTTP handlers.

use agri_core::submission::{
    SubmissionError, SubmissionReceipt, SAVED_MESSAGE, SAVE_FAILED_MESSAGE,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::{error, info};

use crate::SharedState;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

/// POST /api/farmer
///
/// Accepts any JSON value and stores it as a new record. The payload is
/// not validated.
pub async fn save_farmer(
    State(records): State<SharedState>,
    Json(payload): Json<serde_json::Value>,
) -> Response {
    match records.write(&payload).await {
        Ok(path) => {
            let file = path.display().to_string();
            info!("Saved farmer info to {}", file);
            (
                StatusCode::OK,
                Json(SubmissionReceipt {
                    message: SAVED_MESSAGE.to_string(),
                    file,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to save farmer info: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmissionError {
                    error: SAVE_FAILED_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
    }
}
