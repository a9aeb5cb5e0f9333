use std::path::Path;

use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::{routing::any, Router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

/// `/static/*` comes from `static_root`; every other path renders the zone page.
pub fn build_router(state: AppState, static_root: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", any(handlers::zone_page))
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=3600"),
                ))
                .service(ServeDir::new(static_root.as_ref())),
        )
        .fallback(handlers::zone_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
