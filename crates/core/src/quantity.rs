//! Requested line-item quantity.

use serde::{Deserialize, Serialize};

use crate::error::CartError;
use crate::value_object::ValueObject;

/// A strictly positive, integral quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Result<Self, CartError> {
        if value == 0 {
            return Err(CartError::InvalidQuantity);
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl TryFrom<i64> for Quantity {
    type Error = CartError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value = u32::try_from(value).map_err(|_| CartError::InvalidQuantity)?;
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_are_rejected() {
        assert_eq!(Quantity::new(0), Err(CartError::InvalidQuantity));
        assert_eq!(Quantity::try_from(-3_i64), Err(CartError::InvalidQuantity));
        assert_eq!(Quantity::try_from(i64::from(u32::MAX) + 1), Err(CartError::InvalidQuantity));
        assert_eq!(Quantity::try_from(2_i64).map(Quantity::get), Ok(2));
    }

    #[test]
    fn deserializing_validates() {
        let q: Quantity = serde_json::from_str("3").unwrap();
        assert_eq!(q.get(), 3);
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("1.5").is_err());
        assert_eq!(serde_json::to_string(&q).unwrap(), "3");
    }
}
