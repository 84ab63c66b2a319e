//! Service wiring: collaborators, cart manager and checkout workflow.

use std::sync::Arc;

use cartwheel_infra::{
    CartManager, CartStore, CatalogLookup, CheckoutWorkflow, InMemoryCartStore, InMemoryCatalog,
    InMemoryUserLedger, UserLedger, UserLocks,
};

use crate::config::AppConfig;
use crate::seed::SeedData;

/// Everything the handlers need, shared behind an `Arc`.
#[derive(Clone)]
pub struct AppServices {
    pub carts: CartManager,
    pub checkout: CheckoutWorkflow,
    pub users: Arc<dyn UserLedger>,
}

impl AppServices {
    /// Wire the services over arbitrary collaborator implementations.
    ///
    /// Cart mutations and checkouts share one lock table so a user's cart is
    /// never mutated by both at once.
    pub fn from_parts(
        config: &AppConfig,
        cart_store: Arc<dyn CartStore>,
        catalog: Arc<dyn CatalogLookup>,
        users: Arc<dyn UserLedger>,
    ) -> Self {
        let locks = Arc::new(UserLocks::new());
        let carts = CartManager::new(
            cart_store.clone(),
            catalog,
            locks.clone(),
            config.default_payment_option.clone(),
        );
        let checkout = CheckoutWorkflow::new(cart_store, users.clone(), locks, config.pricing);

        Self {
            carts,
            checkout,
            users,
        }
    }

    /// In-memory wiring (dev/test), optionally pre-loaded from a fixture.
    pub fn in_memory(config: &AppConfig, seed: SeedData) -> Self {
        let catalog = Arc::new(InMemoryCatalog::from_products(seed.products));
        let users = Arc::new(InMemoryUserLedger::from_users(seed.users));
        let cart_store = Arc::new(InMemoryCartStore::new());

        tracing::info!(
            products = catalog.len(),
            pricing = config.pricing.as_str(),
            payment_option = %config.default_payment_option,
            "in-memory services ready"
        );

        Self::from_parts(config, cart_store, catalog, users)
    }
}
