use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::AppResult,
    models::{Product, UpdateProduct},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let products = state.store.list().await?;

    info!(count = products.len(), "Listed products");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "data": products,
            "count": products.len(),
        })),
    ))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Json(payload) = payload?;
    let product = state.store.create(payload).await?;

    info!(id = product.id, name = %product.name, "Created product");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "data": product })),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path(id) = id?;
    let product = state.store.get(id).await?;

    info!(id, "Fetched product");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "data": product })),
    ))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateProduct>, JsonRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let product = state.store.update(id, &payload).await?;

    info!(id, "Updated product");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "data": product })),
    ))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path(id) = id?;
    state.store.delete(id).await?;

    info!(id, "Deleted product");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Product deleted",
            "id": id,
        })),
    ))
}
