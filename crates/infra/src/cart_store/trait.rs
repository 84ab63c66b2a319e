use async_trait::async_trait;

use cartwheel_carts::{Cart, PaymentOption};
use cartwheel_core::{StorageError, UserEmail};

/// Document store holding one cart per user.
///
/// Implementations must:
/// - never create a cart from `get_cart`
/// - make `get_or_create_cart` idempotent per email (at most one cart per user)
/// - validate records on `save` and reject ones that break cart invariants
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Load the user's cart, if one exists.
    async fn get_cart(&self, email: &UserEmail) -> Result<Option<Cart>, StorageError>;

    /// Load the user's cart, creating and persisting an empty one with
    /// `default_payment_option` when none exists.
    async fn get_or_create_cart(
        &self,
        email: &UserEmail,
        default_payment_option: &PaymentOption,
    ) -> Result<Cart, StorageError>;

    /// Persist the full cart state (last writer wins).
    async fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}
