use axum::{
    routing::{delete, get, post},
    Router,
};

pub mod cart;
pub mod checkout;
pub mod system;

/// Router for all shopper-scoped endpoints (mounted under `/v1`).
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route(
            "/cart",
            get(cart::get_cart).post(cart::add_item).put(cart::update_item),
        )
        .route("/cart/:product_id", delete(cart::remove_item))
        .route("/checkout", post(checkout::checkout))
}
