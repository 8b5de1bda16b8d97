use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::*;

/// Open the pool and create the products table if it is missing.
pub async fn connect(config: &Config, db_conn: &str) -> anyhow::Result<PgPool> {
    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(8))
        .connect(db_conn)
        .await?;
    info!("Database connection pool established.");

    info!("Running migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Migrations complete.");

    Ok(pool)
}

// ── Products ──────────────────────────────────────────────────────────────────
// `seq` is the insertion counter. Ids may repeat, so every single-row primitive
// targets the lowest `seq` for the id, matching the in-memory first-match scan.

pub async fn fetch_all_products(pool: &PgPool) -> AppResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, stock FROM products ORDER BY seq ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn fetch_product_by_id(pool: &PgPool, id: i64) -> AppResult<Product> {
    sqlx::query_as::<_, Product>(
        "SELECT id, name, price, stock
         FROM products WHERE id = $1
         ORDER BY seq ASC LIMIT 1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::product_not_found(id))
}

pub async fn insert_product(pool: &PgPool, product: &Product) -> AppResult<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (id, name, price, stock)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, price, stock
        "#,
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(product.price)
    .bind(product.stock)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Overwrite the first row with `product.id` with every field of `product`.
pub async fn replace_product(pool: &PgPool, product: &Product) -> AppResult<Product> {
    sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET name  = $2,
            price = $3,
            stock = $4
        WHERE seq = (SELECT seq FROM products WHERE id = $1 ORDER BY seq ASC LIMIT 1)
        RETURNING id, name, price, stock
        "#,
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(product.price)
    .bind(product.stock)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::product_not_found(product.id))
}

pub async fn update_product(pool: &PgPool, id: i64, patch: &UpdateProduct) -> AppResult<Product> {
    // Fetch existing to merge optional fields
    let mut product = fetch_product_by_id(pool, id).await?;
    product.apply(patch);

    replace_product(pool, &product).await
}

pub async fn delete_product(pool: &PgPool, id: i64) -> AppResult<Product> {
    sqlx::query_as::<_, Product>(
        r#"
        DELETE FROM products
        WHERE seq = (SELECT seq FROM products WHERE id = $1 ORDER BY seq ASC LIMIT 1)
        RETURNING id, name, price, stock
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::product_not_found(id))
}
