//! Users domain module.
//!
//! The user record as the checkout sees it: wallet balance and whether a
//! delivery address has been set. Profile management lives elsewhere.

pub mod user;

pub use user::{User, DEFAULT_ADDRESS};
