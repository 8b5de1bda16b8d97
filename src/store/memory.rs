use crate::error::{AppError, AppResult};
use crate::models::{Product, UpdateProduct};

/// Ordered in-memory product collection.
///
/// Ids are not checked for uniqueness. Every id-based operation is a linear scan
/// that stops at the first match, so a duplicate id shadows the later records
/// until the earlier one is deleted.
#[derive(Debug, Default)]
pub struct ProductList {
    products: Vec<Product>,
}

impl ProductList {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    fn position(&self, id: i64) -> AppResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::product_not_found(id))
    }

    pub fn get(&self, id: i64) -> AppResult<&Product> {
        let idx = self.position(id)?;
        Ok(&self.products[idx])
    }

    pub fn push(&mut self, product: Product) -> &Product {
        self.products.push(product);
        &self.products[self.products.len() - 1]
    }

    /// Overwrite the first record whose id equals `product.id`.
    pub fn replace(&mut self, product: Product) -> AppResult<&Product> {
        let idx = self.position(product.id)?;
        self.products[idx] = product;
        Ok(&self.products[idx])
    }

    pub fn update(&mut self, id: i64, patch: &UpdateProduct) -> AppResult<&Product> {
        let idx = self.position(id)?;
        self.products[idx].apply(patch);
        Ok(&self.products[idx])
    }

    /// Remove the first record with `id`, shifting the rest down.
    pub fn remove(&mut self, id: i64) -> AppResult<Product> {
        let idx = self.position(id)?;
        Ok(self.products.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_products;

    fn ids(list: &ProductList) -> Vec<i64> {
        list.all().iter().map(|p| p.id).collect()
    }

    #[test]
    fn get_finds_by_linear_scan() {
        let list = ProductList::new(demo_products());
        assert_eq!(list.get(2).unwrap().name, "Produk B");
        assert!(matches!(list.get(99), Err(AppError::NotFound(_))));
    }

    #[test]
    fn push_appends_without_uniqueness_check() {
        let mut list = ProductList::new(demo_products());
        list.push(Product::new(1, "Duplicate", 1, 1));
        assert_eq!(ids(&list), vec![1, 2, 3, 1]);
        // The original record still wins lookups.
        assert_eq!(list.get(1).unwrap().name, "Produk A");
    }

    #[test]
    fn replace_overwrites_first_match_in_place() {
        let mut list = ProductList::new(demo_products());
        list.push(Product::new(2, "Second two", 5, 5));

        let replaced = list.replace(Product::new(2, "New B", 1, 2)).unwrap().clone();
        assert_eq!(replaced, Product::new(2, "New B", 1, 2));
        assert_eq!(ids(&list), vec![1, 2, 3, 2]);
        assert_eq!(list.all()[1].name, "New B");
        assert_eq!(list.all()[3].name, "Second two");
    }

    #[test]
    fn replace_missing_id_is_not_found() {
        let mut list = ProductList::new(demo_products());
        let err = list.replace(Product::new(42, "Ghost", 0, 0)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(list.all().len(), 3);
    }

    #[test]
    fn update_merges_patch() {
        let mut list = ProductList::new(demo_products());
        let patch = UpdateProduct {
            price: Some(12_500),
            ..Default::default()
        };
        let updated = list.update(3, &patch).unwrap();
        assert_eq!(updated, &Product::new(3, "Produk C", 12_500, 20));
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut list = ProductList::new(demo_products());
        let removed = list.remove(2).unwrap();
        assert_eq!(removed.name, "Produk B");
        assert_eq!(ids(&list), vec![1, 3]);
    }

    #[test]
    fn remove_duplicate_id_exposes_the_next_one() {
        let mut list = ProductList::new(vec![
            Product::new(7, "first", 1, 1),
            Product::new(7, "second", 2, 2),
        ]);
        list.remove(7).unwrap();
        assert_eq!(list.get(7).unwrap().name, "second");
    }

    #[test]
    fn remove_from_empty_list_is_not_found() {
        let mut list = ProductList::default();
        assert!(matches!(list.remove(1), Err(AppError::NotFound(_))));
    }
}
