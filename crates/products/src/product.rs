use serde::{Deserialize, Serialize};

use cartwheel_core::{Entity, ProductId, ValueObject};

/// Catalog product.
///
/// Only `cost` takes part in checkout; the rest is display metadata carried
/// along inside line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Unit cost in whole currency units.
    pub cost: u64,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub image: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        cost: u64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            cost,
            rating: 0,
            image: String::new(),
        }
    }

    /// Cost of `quantity` units, saturating at `u64::MAX`.
    pub fn cost_for(&self, quantity: u32) -> u64 {
        self.cost.saturating_mul(u64::from(quantity))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl ValueObject for Product {}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_id(raw: &str) -> ProductId {
        ProductId::parse(raw).unwrap()
    }

    #[test]
    fn cost_for_multiplies_and_saturates() {
        let p = Product::new(product_id("p1"), "UNIFACTOR Mens Running Shoes", "Fashion", 50);
        assert_eq!(p.cost_for(3), 150);

        let pricey = Product::new(product_id("p2"), "Yarine Floor Lamp", "Home & Kitchen", u64::MAX);
        assert_eq!(pricey.cost_for(2), u64::MAX);
    }

    #[test]
    fn serializes_with_document_id_field() {
        let p = Product::new(product_id("BW0jAAeDJmlZCF8i"), "Atomberg Renesa Ceiling Fan", "Home & Kitchen", 200);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["_id"], "BW0jAAeDJmlZCF8i");
        assert_eq!(json["cost"], 200);

        let parsed: Product = serde_json::from_value(serde_json::json!({
            "_id": "KCRwjF7lN97HnEaY",
            "name": "Tan Leatherette Weekender Duffle",
            "category": "Fashion",
            "cost": 150
        }))
        .unwrap();
        assert_eq!(parsed.rating, 0);
        assert_eq!(parsed.id.as_str(), "KCRwjF7lN97HnEaY");
    }
}
