use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::store::ProductStore;

/// Shared application state, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: ProductStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,cashier_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let store = match config.db_conn.as_deref() {
        Some(db_conn) => ProductStore::Postgres(db::connect(&config, db_conn).await?),
        None => {
            info!("DB_CONN not set, serving products from memory.");
            ProductStore::in_memory(seed::demo_products())
        }
    };

    let app = build_router(AppState { store });

    let addr = format!("{}:{}", config.host, config.port);
    info!("Cashier API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health).fallback(handlers::method_not_allowed))

        // ── Products, resource style ────────────────────────────────────────
        .route(
            "/api/produk",
            get(handlers::products::list_products)
                .post(handlers::products::create_product)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/produk/:id",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product)
                .fallback(handlers::method_not_allowed),
        )

        // ── Products, legacy flat routes ────────────────────────────────────
        .route(
            "/produk",
            get(handlers::legacy::list_products).fallback(handlers::method_not_allowed),
        )
        .route(
            "/produk/",
            get(handlers::legacy::missing_id).fallback(handlers::method_not_allowed),
        )
        .route(
            "/produk/:id",
            get(handlers::legacy::get_product).fallback(handlers::method_not_allowed),
        )
        .route(
            "/tambah",
            post(handlers::legacy::add_product).fallback(handlers::method_not_allowed),
        )
        .route(
            "/hapus",
            delete(handlers::legacy::remove_product).fallback(handlers::method_not_allowed),
        )
        .route(
            "/update",
            put(handlers::legacy::replace_product).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::route_not_found)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
