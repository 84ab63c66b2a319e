use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use cartwheel_core::{ErrorKind, UserEmail};

use crate::app::errors::json_error;
use crate::app::services::AppServices;
use crate::context::ShopperContext;

/// Header carrying the identity established by the upstream auth layer.
pub const USER_EMAIL_HEADER: &str = "x-user-email";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Resolve the shopper named by `x-user-email` against the user ledger.
pub async fn shopper_middleware(
    State(services): State<Arc<AppServices>>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let email = match extract_email(req.headers()) {
        Ok(email) => email,
        Err(message) => return json_error(StatusCode::UNAUTHORIZED, "unauthenticated", message),
    };

    let user = match services.users.find_user(&email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!(user = %email, "request for unknown user");
            return json_error(StatusCode::UNAUTHORIZED, "unknown_user", "unknown user");
        }
        Err(e) => {
            tracing::error!(user = %email, error = %e, "user lookup failed");
            return json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorKind::StorageFailure.as_str(),
                "failed to load user",
            );
        }
    };

    req.extensions_mut().insert(ShopperContext::new(user));
    next.run(req).await
}

/// Tag each request with an id (taken from `x-request-id` or generated) and
/// run the handler inside a span carrying it.
pub async fn request_id_middleware(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let request_id = resolve_request_id(req.headers());
    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let mut res = next.run(req).instrument(span.clone()).await;
    span.in_scope(|| tracing::info!(status = res.status().as_u16(), "request completed"));

    match HeaderValue::from_str(&request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(e) => tracing::warn!(request_id = %request_id, "could not encode request id header: {e}"),
    }
    res
}

fn extract_email(headers: &HeaderMap) -> Result<UserEmail, &'static str> {
    let header = headers
        .get(USER_EMAIL_HEADER)
        .ok_or("missing x-user-email header")?;
    let raw = header.to_str().map_err(|_| "x-user-email is not valid text")?;
    UserEmail::parse(raw).map_err(|_| "x-user-email is not a valid email")
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_str(v).unwrap());
        }
        map
    }

    #[test]
    fn email_header_is_required_and_validated() {
        assert!(extract_email(&headers(&[])).is_err());
        assert!(extract_email(&headers(&[(USER_EMAIL_HEADER, "no-at-sign")])).is_err());
        let email = extract_email(&headers(&[(USER_EMAIL_HEADER, " crio-user@gmail.com ")])).unwrap();
        assert_eq!(email.as_str(), "crio-user@gmail.com");
    }

    #[test]
    fn request_id_is_reused_or_generated() {
        assert_eq!(
            resolve_request_id(&headers(&[(REQUEST_ID_HEADER, "abc-123")])),
            "abc-123"
        );
        let generated = resolve_request_id(&headers(&[(REQUEST_ID_HEADER, "  ")]));
        assert!(Uuid::parse_str(&generated).is_ok());
    }
}
