use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use cartwheel_core::{CartError, ErrorClass};

/// Map a cart/checkout failure to its HTTP response.
///
/// Client-class errors are 400 with the human message; storage failures are
/// 500 and only expose what was being attempted.
pub fn cart_error_to_response(err: CartError) -> axum::response::Response {
    let kind = err.kind();
    match (kind.class(), &err) {
        (ErrorClass::Server, CartError::Storage { context, .. }) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, kind.as_str(), *context)
        }
        (ErrorClass::Server, _) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, kind.as_str(), err.to_string())
        }
        (ErrorClass::Client, _) => json_error(StatusCode::BAD_REQUEST, kind.as_str(), err.to_string()),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartwheel_core::{NoCartContext, StorageError};

    #[test]
    fn client_errors_are_bad_request() {
        for err in [
            CartError::DuplicateItem,
            CartError::NoCart(NoCartContext::Update),
            CartError::InsufficientBalance,
            CartError::InvalidQuantity,
        ] {
            assert_eq!(cart_error_to_response(err).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn storage_failures_are_internal_errors() {
        let err = CartError::storage("User cart creation failed", StorageError::unavailable("down"));
        assert_eq!(
            cart_error_to_response(err).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
