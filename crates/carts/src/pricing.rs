//! Checkout total computation.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;

/// How the checkout turns a cart into an amount to debit.
///
/// `LastLineItem` charges cost × quantity of the last line only. Existing
/// clients depend on this amount, so it stays the default; `SumOfLineItems`
/// charges every line and is opt-in through configuration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutPricing {
    #[default]
    LastLineItem,
    SumOfLineItems,
}

impl CheckoutPricing {
    /// Amount to charge for `cart`. Empty carts cost nothing.
    pub fn total(self, cart: &Cart) -> u64 {
        match self {
            CheckoutPricing::LastLineItem => {
                cart.items().last().map(|item| item.cost()).unwrap_or(0)
            }
            CheckoutPricing::SumOfLineItems => cart
                .items()
                .iter()
                .fold(0u64, |acc, item| acc.saturating_add(item.cost())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CheckoutPricing::LastLineItem => "last_item",
            CheckoutPricing::SumOfLineItems => "sum",
        }
    }
}

impl FromStr for CheckoutPricing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last_item" | "last" => Ok(CheckoutPricing::LastLineItem),
            "sum" | "sum_of_items" => Ok(CheckoutPricing::SumOfLineItems),
            other => Err(format!(
                "unknown checkout pricing '{other}' (expected one of: last_item, sum)"
            )),
        }
    }
}
