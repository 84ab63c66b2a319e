use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::context::ShopperContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// The resolved shopper, including wallet balance and address.
pub async fn whoami(Extension(shopper): Extension<ShopperContext>) -> impl IntoResponse {
    Json(shopper.user().clone())
}
