//! Cart persistence boundary.
//!
//! One document per user, keyed by email. Stores never merge or reorder line
//! items; they persist whatever state the cart manager hands them.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryCartStore;
pub use r#trait::CartStore;

#[cfg(test)]
pub use r#trait::MockCartStore;
