use serde::{Deserialize, Serialize};

/// A product record. `id` is supplied by the client and is not guaranteed unique;
/// every lookup acts on the first record carrying it.
///
/// Missing body fields decode to zero values; only mistyped fields are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub stock: i32,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: i64, stock: i32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    /// Merge a partial update into this record. The id never changes.
    pub fn apply(&mut self, patch: &UpdateProduct) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
    }
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub stock: Option<i32>,
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i64,
}
