mod memory;

pub use memory::ProductList;

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::db;
use crate::error::AppResult;
use crate::models::{Product, UpdateProduct};

/// Where products live. Both backends share first-match-by-id semantics.
#[derive(Clone)]
pub enum ProductStore {
    Memory(Arc<RwLock<ProductList>>),
    Postgres(PgPool),
}

impl ProductStore {
    pub fn in_memory(products: Vec<Product>) -> Self {
        ProductStore::Memory(Arc::new(RwLock::new(ProductList::new(products))))
    }

    pub fn backend(&self) -> &'static str {
        match self {
            ProductStore::Memory(_) => "memory",
            ProductStore::Postgres(_) => "postgres",
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Product>> {
        match self {
            ProductStore::Memory(list) => Ok(list.read().await.all().to_vec()),
            ProductStore::Postgres(pool) => db::fetch_all_products(pool).await,
        }
    }

    pub async fn get(&self, id: i64) -> AppResult<Product> {
        match self {
            ProductStore::Memory(list) => list.read().await.get(id).cloned(),
            ProductStore::Postgres(pool) => db::fetch_product_by_id(pool, id).await,
        }
    }

    pub async fn create(&self, product: Product) -> AppResult<Product> {
        match self {
            ProductStore::Memory(list) => Ok(list.write().await.push(product).clone()),
            ProductStore::Postgres(pool) => db::insert_product(pool, &product).await,
        }
    }

    pub async fn replace(&self, product: Product) -> AppResult<Product> {
        match self {
            ProductStore::Memory(list) => list.write().await.replace(product).cloned(),
            ProductStore::Postgres(pool) => db::replace_product(pool, &product).await,
        }
    }

    pub async fn update(&self, id: i64, patch: &UpdateProduct) -> AppResult<Product> {
        match self {
            ProductStore::Memory(list) => list.write().await.update(id, patch).cloned(),
            ProductStore::Postgres(pool) => db::update_product(pool, id, patch).await,
        }
    }

    pub async fn delete(&self, id: i64) -> AppResult<Product> {
        match self {
            ProductStore::Memory(list) => list.write().await.remove(id),
            ProductStore::Postgres(pool) => db::delete_product(pool, id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::seed::demo_products;

    #[tokio::test]
    async fn memory_store_round_trip() {
        let store = ProductStore::in_memory(demo_products());
        assert_eq!(store.backend(), "memory");

        store.create(Product::new(4, "Produk D", 5_000, 10)).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 4);

        store
            .replace(Product::new(4, "Produk D+", 6_000, 9))
            .await
            .unwrap();
        assert_eq!(store.get(4).await.unwrap().name, "Produk D+");

        let removed = store.delete(4).await.unwrap();
        assert_eq!(removed.price, 6_000);
        assert!(matches!(store.get(4).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn clones_share_the_same_collection() {
        let store = ProductStore::in_memory(Vec::new());
        let other = store.clone();
        other.create(Product::new(1, "Shared", 1, 1)).await.unwrap();
        assert_eq!(store.list().await.unwrap(), vec![Product::new(1, "Shared", 1, 1)]);
    }
}
