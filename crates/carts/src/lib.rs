//! Carts domain module.
//!
//! This crate contains the rules for a single user's cart (line-item
//! uniqueness, quantity replacement, ordered removal, checkout totals),
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod cart;
pub mod pricing;

pub use cart::{Cart, LineItem, PaymentOption};
pub use pricing::CheckoutPricing;
