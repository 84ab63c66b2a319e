//! Infrastructure + application layer: persistence boundaries, their
//! in-memory adapters, and the cart/checkout services built on top of them.

pub mod cart_manager;
pub mod cart_store;
pub mod catalog;
pub mod checkout;
pub mod locks;
pub mod user_ledger;

pub use cart_manager::CartManager;
pub use cart_store::{CartStore, InMemoryCartStore};
pub use catalog::{CatalogLookup, InMemoryCatalog};
pub use checkout::CheckoutWorkflow;
pub use locks::{UserLockGuard, UserLocks};
pub use user_ledger::{InMemoryUserLedger, UserLedger};
