pub mod legacy;
pub mod products;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::{error::AppError, AppState};

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "OK",
            "message": "Cashier API is running",
            "storage": state.store.backend(),
        })),
    )
}

/// Router fallback for paths with no route.
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Per-route fallback for verbs a path does not accept.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
