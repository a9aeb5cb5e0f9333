use std::net::SocketAddr;

use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// The caller's address: a non-empty `X-Forwarded-For` value as sent,
/// otherwise the transport peer.
pub fn source_address(headers: &HeaderMap, remote: Option<SocketAddr>) -> String {
    if let Some(forwarded) = headers
        .get(X_FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
    {
        return forwarded.to_string();
    }
    remote
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Renders `t` as HTML. A failed render only fails this request.
pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
