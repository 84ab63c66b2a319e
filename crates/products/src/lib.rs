//! Products domain module.
//!
//! Catalog records as the cart sees them. Line items embed a copy of the
//! product taken when the item was added (no IO, no HTTP, no storage).

pub mod product;

pub use product::Product;
