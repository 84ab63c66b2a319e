use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use cartwheel_core::CartError;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::ShopperContext;

pub async fn get_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(shopper): Extension<ShopperContext>,
) -> axum::response::Response {
    match services.carts.get_cart(shopper.email()).await {
        Ok(cart) => (StatusCode::OK, Json(cart)).into_response(),
        Err(e @ CartError::NoCart(_)) => {
            errors::json_error(StatusCode::NOT_FOUND, e.kind().as_str(), e.to_string())
        }
        Err(e) => errors::cart_error_to_response(e),
    }
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(shopper): Extension<ShopperContext>,
    body: Result<Json<dto::CartItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return dto::body_rejection(rejection),
    };
    let (product_id, quantity) = match body.parse() {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services
        .carts
        .add_product(shopper.email(), &product_id, quantity)
        .await
    {
        Ok(cart) => (StatusCode::CREATED, Json(cart)).into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(shopper): Extension<ShopperContext>,
    body: Result<Json<dto::CartItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return dto::body_rejection(rejection),
    };
    let (product_id, quantity) = match body.parse() {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services
        .carts
        .update_product(shopper.email(), &product_id, quantity)
        .await
    {
        Ok(cart) => (StatusCode::OK, Json(cart)).into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(shopper): Extension<ShopperContext>,
    Path(product_id): Path<String>,
) -> axum::response::Response {
    let product_id = match dto::parse_product_id(&product_id) {
        Ok(id) => id,
        Err(res) => return res,
    };

    match services.carts.remove_product(shopper.email(), &product_id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}
