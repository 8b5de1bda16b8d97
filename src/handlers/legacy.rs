//! Flat routes kept wire-compatible with the first cashier clients: bodies are
//! the bare product or product array, with no `data` envelope.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{IdQuery, Product},
    AppState,
};

/// `GET /produk`
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.store.list().await?;
    info!(count = products.len(), "Listed products");
    Ok(Json(products))
}

/// `GET /produk/:id`
pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Product>> {
    let Path(id) = id?;
    let product = state.store.get(id).await?;

    info!(id, "Fetched product");

    Ok(Json(product))
}

/// `GET /produk/` with an empty id segment.
pub async fn missing_id() -> AppError {
    AppError::BadRequest("Invalid ID: missing product id".to_string())
}

/// `POST /tambah`
pub async fn add_product(
    State(state): State<AppState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let Json(payload) = payload?;
    let product = state.store.create(payload).await?;

    info!(id = product.id, name = %product.name, "Product added");

    Ok((StatusCode::CREATED, Json(product)))
}

/// `DELETE /hapus?id=N`
pub async fn remove_product(
    State(state): State<AppState>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> AppResult<Json<serde_json::Value>> {
    let Query(IdQuery { id }) = query?;
    state.store.delete(id).await?;

    info!(id, "Product removed");

    Ok(Json(serde_json::json!({
        "message": "Product deleted",
        "id": id,
    })))
}

/// `PUT /update`: the body's `id` picks the record, every field is replaced.
pub async fn replace_product(
    State(state): State<AppState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let Json(payload) = payload?;
    let product = state.store.replace(payload).await?;

    info!(id = product.id, "Product updated");

    Ok(Json(product))
}
