use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use serde::Deserialize;

use cartwheel_core::{ProductId, Quantity};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /v1/cart` and `PUT /v1/cart`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub product_id: String,
    pub quantity: i64,
}

impl CartItemRequest {
    pub fn parse(self) -> Result<(ProductId, Quantity), axum::response::Response> {
        let product_id = parse_product_id(&self.product_id)?;
        let quantity = Quantity::try_from(self.quantity).map_err(errors::cart_error_to_response)?;
        Ok((product_id, quantity))
    }
}

// -------------------------
// Parsing helpers
// -------------------------

pub fn parse_product_id(raw: &str) -> Result<ProductId, axum::response::Response> {
    ProductId::parse(raw)
        .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, "invalid_product_id", e.to_string()))
}

/// Turn a body extraction failure into the API's error shape.
pub fn body_rejection(rejection: JsonRejection) -> axum::response::Response {
    errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(product_id: &str, quantity: i64) -> CartItemRequest {
        CartItemRequest {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[test]
    fn accepts_positive_quantity() {
        let (id, qty) = request("KCRwjF7lN97HnEaY", 3).parse().unwrap();
        assert_eq!(id.as_str(), "KCRwjF7lN97HnEaY");
        assert_eq!(qty.get(), 3);
    }

    #[test]
    fn rejects_non_positive_quantity_and_blank_id() {
        for bad in [request("a", 0), request("a", -2), request("  ", 1)] {
            let res = bad.parse().unwrap_err();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn body_uses_camel_case() {
        let body: CartItemRequest =
            serde_json::from_str(r#"{"productId":"a","quantity":2}"#).unwrap();
        assert_eq!(body.product_id, "a");
    }
}
