use async_trait::async_trait;

use cartwheel_core::{ProductId, StorageError};
use cartwheel_products::Product;

/// Read-only access to product records by identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Returns `Ok(None)` when no product has this id.
    async fn find_product_by_id(&self, id: &ProductId) -> Result<Option<Product>, StorageError>;
}
