use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use cartwheel_core::{ProductId, StorageError};
use cartwheel_products::Product;

use super::r#trait::CatalogLookup;

/// In-memory catalog for tests/dev and seeded local runs.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let catalog = Self::new();
        for p in products {
            catalog.insert(p);
        }
        catalog
    }

    /// Insert or replace a product record.
    pub fn insert(&self, product: Product) {
        self.products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(product.id.clone(), product);
    }

    pub fn len(&self) -> usize {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CatalogLookup for InMemoryCatalog {
    async fn find_product_by_id(&self, id: &ProductId) -> Result<Option<Product>, StorageError> {
        let map = self
            .products
            .read()
            .map_err(|_| StorageError::unavailable("catalog lock poisoned"))?;
        Ok(map.get(id).cloned())
    }
}
