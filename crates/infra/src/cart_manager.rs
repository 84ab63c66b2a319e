//! Cart manager: business rules for adding, updating and removing line items.
//!
//! ```text
//! caller (already authenticated user)
//!   ↓
//! 1. Take the user's lock
//!   ↓
//! 2. Load (or lazily create) the cart from the cart store
//!   ↓
//! 3. Check the request against the cart and the catalog
//!   ↓
//! 4. Mutate the cart and persist the whole document
//! ```
//!
//! Checks run in a fixed order so that a request failing several of them
//! always reports the same error.

use std::sync::Arc;

use cartwheel_carts::{Cart, PaymentOption};
use cartwheel_core::{CartError, CartResult, NoCartContext, ProductId, Quantity, UserEmail};
use cartwheel_products::Product;

use crate::cart_store::CartStore;
use crate::catalog::CatalogLookup;
use crate::locks::UserLocks;

/// Cart mutations for one authenticated user at a time.
#[derive(Clone)]
pub struct CartManager {
    carts: Arc<dyn CartStore>,
    catalog: Arc<dyn CatalogLookup>,
    locks: Arc<UserLocks>,
    default_payment_option: PaymentOption,
}

impl core::fmt::Debug for CartManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CartManager")
            .field("default_payment_option", &self.default_payment_option)
            .finish_non_exhaustive()
    }
}

impl CartManager {
    pub fn new(
        carts: Arc<dyn CartStore>,
        catalog: Arc<dyn CatalogLookup>,
        locks: Arc<UserLocks>,
        default_payment_option: PaymentOption,
    ) -> Self {
        Self {
            carts,
            catalog,
            locks,
            default_payment_option,
        }
    }

    /// Fetch the user's cart. Never creates one.
    pub async fn get_cart(&self, email: &UserEmail) -> CartResult<Cart> {
        self.load_existing(email, NoCartContext::Read).await
    }

    /// Add a product the cart does not yet contain.
    ///
    /// Creates the cart on first use. Fails with `DuplicateItem` if the product
    /// is already present (no quantity merge) and `UnknownProduct` if the
    /// catalog has no such id.
    pub async fn add_product(
        &self,
        email: &UserEmail,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> CartResult<Cart> {
        let _guard = self.locks.acquire(email).await;

        let mut cart = self
            .carts
            .get_or_create_cart(email, &self.default_payment_option)
            .await
            .map_err(|e| {
                tracing::error!(user = %email, error = %e, "cart creation failed");
                CartError::storage("User cart creation failed", e)
            })?;

        if cart.contains(product_id) {
            tracing::warn!(user = %email, product = %product_id, "product already in cart");
            return Err(CartError::DuplicateItem);
        }

        let product = self.find_product(product_id).await?;
        cart.add_item(product, quantity)?;
        self.persist(&cart).await?;

        tracing::info!(
            user = %email,
            product = %product_id,
            quantity = quantity.get(),
            items = cart.len(),
            "product added to cart"
        );
        Ok(cart)
    }

    /// Replace the quantity of a product already in the cart.
    pub async fn update_product(
        &self,
        email: &UserEmail,
        product_id: &ProductId,
        quantity: Quantity,
    ) -> CartResult<Cart> {
        let _guard = self.locks.acquire(email).await;

        let mut cart = self.load_existing(email, NoCartContext::Update).await?;
        self.find_product(product_id).await?;
        cart.set_quantity(product_id, quantity)?;
        self.persist(&cart).await?;

        tracing::info!(
            user = %email,
            product = %product_id,
            quantity = quantity.get(),
            "cart quantity updated"
        );
        Ok(cart)
    }

    /// Remove a product from the cart, keeping the order of the other lines.
    pub async fn remove_product(&self, email: &UserEmail, product_id: &ProductId) -> CartResult<()> {
        let _guard = self.locks.acquire(email).await;

        let mut cart = self.load_existing(email, NoCartContext::Remove).await?;
        cart.remove_item(product_id)?;
        self.persist(&cart).await?;

        tracing::info!(user = %email, product = %product_id, items = cart.len(), "product removed from cart");
        Ok(())
    }

    async fn load_existing(&self, email: &UserEmail, context: NoCartContext) -> CartResult<Cart> {
        self.carts
            .get_cart(email)
            .await
            .map_err(|e| CartError::storage("failed to load cart", e))?
            .ok_or(CartError::NoCart(context))
    }

    async fn find_product(&self, product_id: &ProductId) -> CartResult<Product> {
        self.catalog
            .find_product_by_id(product_id)
            .await
            .map_err(|e| CartError::storage("catalog lookup failed", e))?
            .ok_or(CartError::UnknownProduct)
    }

    async fn persist(&self, cart: &Cart) -> CartResult<()> {
        self.carts.save(cart).await.map_err(|e| {
            tracing::error!(user = %cart.email(), error = %e, "cart save failed");
            CartError::storage("failed to save cart", e)
        })
    }
}
