use serde::{Deserialize, Serialize};

use cartwheel_core::{CartError, CartResult, Entity, ProductId, Quantity, UserEmail, ValueObject};
use cartwheel_products::Product;

/// Payment option tag stored on a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentOption(String);

impl PaymentOption {
    /// Tag used when configuration does not name one.
    pub const DEFAULT: &'static str = "PAYMENT_OPTION_DEFAULT";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PaymentOption {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl core::fmt::Display for PaymentOption {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cart line: product snapshot + requested quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Product,
    pub quantity: Quantity,
}

impl LineItem {
    pub fn new(product: Product, quantity: Quantity) -> Self {
        Self { product, quantity }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Cost of this line (unit cost × quantity, saturating).
    pub fn cost(&self) -> u64 {
        self.product.cost_for(self.quantity.get())
    }
}

impl ValueObject for LineItem {}

/// A user's cart. One per user, keyed by email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    email: UserEmail,
    cart_items: Vec<LineItem>,
    payment_option: PaymentOption,
}

impl Cart {
    /// A new, empty cart.
    pub fn new(email: UserEmail, payment_option: PaymentOption) -> Self {
        Self {
            email,
            cart_items: Vec::new(),
            payment_option,
        }
    }

    pub fn email(&self) -> &UserEmail {
        &self.email
    }

    pub fn items(&self) -> &[LineItem] {
        &self.cart_items
    }

    pub fn payment_option(&self) -> &PaymentOption {
        &self.payment_option
    }

    pub fn is_empty(&self) -> bool {
        self.cart_items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cart_items.len()
    }

    /// Index of the line item holding `product_id`. First match wins.
    pub fn position_of(&self, product_id: &ProductId) -> Option<usize> {
        self.cart_items
            .iter()
            .position(|item| item.product_id() == product_id)
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.position_of(product_id).is_some()
    }

    pub fn item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.position_of(product_id)
            .and_then(|idx| self.cart_items.get(idx))
    }

    /// Append a new line. Fails with `DuplicateItem` if the product is
    /// already in the cart; quantities are never merged.
    pub fn add_item(&mut self, product: Product, quantity: Quantity) -> CartResult<()> {
        if self.contains(&product.id) {
            return Err(CartError::DuplicateItem);
        }
        self.cart_items.push(LineItem::new(product, quantity));
        Ok(())
    }

    /// Replace (not increment) the quantity of an existing line.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: Quantity) -> CartResult<()> {
        let item = self
            .cart_items
            .iter_mut()
            .find(|item| item.product_id() == product_id)
            .ok_or(CartError::ItemNotInCart)?;
        item.quantity = quantity;
        Ok(())
    }

    /// Remove a line, keeping the relative order of the others.
    pub fn remove_item(&mut self, product_id: &ProductId) -> CartResult<LineItem> {
        let idx = self.position_of(product_id).ok_or(CartError::ItemNotInCart)?;
        Ok(self.cart_items.remove(idx))
    }

    /// Drop every line item (checkout). The cart itself survives.
    pub fn clear(&mut self) {
        self.cart_items.clear();
    }

    /// Required-field validation applied by stores before persisting.
    pub fn validate(&self) -> Result<(), String> {
        if UserEmail::parse(self.email.as_str()).is_err() {
            return Err(format!("cart owner '{}' is not a valid email", self.email));
        }
        for (idx, item) in self.cart_items.iter().enumerate() {
            if self.position_of(item.product_id()) != Some(idx) {
                return Err(format!(
                    "product {} appears more than once in cart of {}",
                    item.product_id(),
                    self.email
                ));
            }
        }
        Ok(())
    }
}

impl Entity for Cart {
    type Id = UserEmail;

    fn id(&self) -> &Self::Id {
        &self.email
    }
}
