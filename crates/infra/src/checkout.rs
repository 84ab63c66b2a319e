//! Checkout: validate the cart, debit the wallet, empty the cart.
//!
//! Single-shot and not resumable. Preconditions are checked in this order:
//! cart exists, cart has items, address is set, wallet covers the total.
//! Nothing is written unless all of them hold.
//!
//! The cart is persisted before the user. If the user write fails the cart
//! stays emptied and the caller sees a storage failure; there is no
//! compensating write.

use std::sync::Arc;

use cartwheel_carts::CheckoutPricing;
use cartwheel_core::{CartError, CartResult, NoCartContext};
use cartwheel_users::User;

use crate::cart_store::CartStore;
use crate::locks::UserLocks;
use crate::user_ledger::UserLedger;

#[derive(Clone)]
pub struct CheckoutWorkflow {
    carts: Arc<dyn CartStore>,
    users: Arc<dyn UserLedger>,
    locks: Arc<UserLocks>,
    pricing: CheckoutPricing,
}

impl core::fmt::Debug for CheckoutWorkflow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CheckoutWorkflow")
            .field("pricing", &self.pricing)
            .finish_non_exhaustive()
    }
}

impl CheckoutWorkflow {
    pub fn new(
        carts: Arc<dyn CartStore>,
        users: Arc<dyn UserLedger>,
        locks: Arc<UserLocks>,
        pricing: CheckoutPricing,
    ) -> Self {
        Self {
            carts,
            users,
            locks,
            pricing,
        }
    }

    /// Check out `user`'s cart and return the user with the debited wallet.
    ///
    /// The ledger copy of the user is authoritative once the lock is held, so
    /// a balance debited by a concurrent checkout is never reused. `user` is
    /// only used as-is when the ledger has no record for it.
    pub async fn checkout(&self, user: &User) -> CartResult<User> {
        let _guard = self.locks.acquire(&user.email).await;

        let mut user = self
            .users
            .find_user(&user.email)
            .await
            .map_err(|e| CartError::storage("failed to load user", e))?
            .unwrap_or_else(|| user.clone());
        let email = user.email.clone();

        let mut cart = self
            .carts
            .get_cart(&email)
            .await
            .map_err(|e| CartError::storage("failed to load cart", e))?
            .ok_or(CartError::NoCart(NoCartContext::Checkout))
            .inspect_err(|_| tracing::warn!(user = %email, "checkout without a cart"))?;

        if cart.is_empty() {
            tracing::warn!(user = %email, "checkout of empty cart");
            return Err(CartError::EmptyCart);
        }

        if !user.has_non_default_address() {
            tracing::warn!(user = %email, "checkout without delivery address");
            return Err(CartError::AddressNotSet);
        }

        let total = self.pricing.total(&cart);
        if !user.debit(total) {
            tracing::warn!(
                user = %email,
                total,
                wallet = user.wallet_money,
                "insufficient balance for checkout"
            );
            return Err(CartError::InsufficientBalance);
        }

        let items = cart.len();
        cart.clear();

        self.carts.save(&cart).await.map_err(|e| {
            tracing::error!(user = %email, error = %e, "checkout cart save failed");
            CartError::storage("failed to save cart", e)
        })?;

        self.users.save_user(&user).await.map_err(|e| {
            tracing::error!(
                user = %email,
                total,
                error = %e,
                "user save failed after cart was emptied; wallet not debited"
            );
            CartError::storage("failed to save user", e)
        })?;

        tracing::info!(
            user = %email,
            items,
            total,
            pricing = self.pricing.as_str(),
            wallet = user.wallet_money,
            "checkout completed"
        );
        Ok(user)
    }
}
