//! Read-only product catalog boundary.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryCatalog;
pub use r#trait::CatalogLookup;

#[cfg(test)]
pub use r#trait::MockCatalogLookup;
