//! `cartwheel-core`: shared building blocks for the cart domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod quantity;
pub mod value_object;

pub use entity::Entity;
pub use error::{CartError, CartResult, ErrorClass, ErrorKind, NoCartContext, StorageError};
pub use id::{InvalidId, ProductId, UserEmail};
pub use quantity::Quantity;
pub use value_object::ValueObject;
