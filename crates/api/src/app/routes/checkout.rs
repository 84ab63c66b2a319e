use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::ShopperContext;

/// Check out the shopper's cart; responds with the debited user record.
pub async fn checkout(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(shopper): Extension<ShopperContext>,
) -> axum::response::Response {
    match services.checkout.checkout(shopper.user()).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => errors::cart_error_to_response(e),
    }
}
