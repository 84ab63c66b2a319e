use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use cartwheel_carts::{Cart, PaymentOption};
use cartwheel_core::{Entity, StorageError, UserEmail};

use super::r#trait::CartStore;

/// In-memory cart store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    carts: RwLock<HashMap<UserEmail, Cart>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of carts held (one per user).
    pub fn len(&self) -> usize {
        self.carts.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> StorageError {
    StorageError::unavailable("cart store lock poisoned")
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn get_cart(&self, email: &UserEmail) -> Result<Option<Cart>, StorageError> {
        let carts = self.carts.read().map_err(|_| poisoned())?;
        Ok(carts.get(email).cloned())
    }

    async fn get_or_create_cart(
        &self,
        email: &UserEmail,
        default_payment_option: &PaymentOption,
    ) -> Result<Cart, StorageError> {
        let mut carts = self.carts.write().map_err(|_| poisoned())?;
        let cart = carts
            .entry(email.clone())
            .or_insert_with(|| Cart::new(email.clone(), default_payment_option.clone()));
        Ok(cart.clone())
    }

    async fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        cart.validate().map_err(StorageError::invalid_record)?;

        let mut carts = self.carts.write().map_err(|_| poisoned())?;
        carts.insert(cart.id().clone(), cart.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartwheel_core::{ProductId, Quantity};
    use cartwheel_products::Product;

    fn email(raw: &str) -> UserEmail {
        UserEmail::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn get_cart_never_creates() {
        let store = InMemoryCartStore::new();
        assert_eq!(store.get_cart(&email("a@x.io")).await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn get_or_create_is_idempotent_per_user() {
        let store = InMemoryCartStore::new();
        let first = store
            .get_or_create_cart(&email("a@x.io"), &PaymentOption::default())
            .await
            .unwrap();
        let second = store
            .get_or_create_cart(&email("a@x.io"), &PaymentOption::new("OTHER"))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(second.payment_option().as_str(), "PAYMENT_OPTION_DEFAULT");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn save_overwrites_full_state() {
        let store = InMemoryCartStore::new();
        let mut cart = store
            .get_or_create_cart(&email("a@x.io"), &PaymentOption::default())
            .await
            .unwrap();

        let product = Product::new(ProductId::parse("p1").unwrap(), "Lamp", "Home", 10);
        cart.add_item(product, Quantity::new(2).unwrap()).unwrap();
        store.save(&cart).await.unwrap();

        let loaded = store.get_cart(&email("a@x.io")).await.unwrap().unwrap();
        assert_eq!(loaded.items().len(), 1);
        assert_eq!(loaded, cart);
    }

    #[tokio::test]
    async fn documents_without_a_valid_owner_never_reach_the_store() {
        let store = InMemoryCartStore::new();
        let parsed = serde_json::from_value::<Cart>(serde_json::json!({
            "email": "",
            "cartItems": [],
            "paymentOption": "PAYMENT_OPTION_DEFAULT"
        }));
        assert!(parsed.is_err());

        let cart: Cart = serde_json::from_value(serde_json::json!({
            "email": "a@x.io",
            "cartItems": [],
            "paymentOption": "PAYMENT_OPTION_DEFAULT"
        }))
        .unwrap();
        store.save(&cart).await.unwrap();
        assert_eq!(store.len(), 1);
    }
}
