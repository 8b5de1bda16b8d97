use crate::models::Product;

static DEMO_PRODUCTS: &[(i64, &str, i64, i32)] = &[
    (1, "Produk A", 10_000, 50),
    (2, "Produk B", 20_000, 30),
    (3, "Produk C", 15_000, 20),
];

/// Products the in-memory collection starts with.
pub fn demo_products() -> Vec<Product> {
    DEMO_PRODUCTS
        .iter()
        .map(|&(id, name, price, stock)| Product::new(id, name, price, stock))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_products_are_in_id_order() {
        let ids: Vec<i64> = demo_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
