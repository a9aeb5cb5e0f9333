use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, Method, Uri};
use axum::response::Response;

use super::helpers::{render_template, source_address};
use crate::models::{lookup_region, region_from_zone, AppState};
use crate::templates::{ErrorPageTemplate, SuccessPageTemplate};

/// Serves the zone page for every non-static path.
pub async fn zone_page(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
) -> Response {
    let src = source_address(&headers, connect_info.map(|ConnectInfo(addr)| addr));
    tracing::info!(%method, path = uri.path(), %src, "received request");

    let instance = &state.instance;
    if !instance.has_zone() {
        return render_template(ErrorPageTemplate::zone_unresolved());
    }

    let region = lookup_region(region_from_zone(&instance.zone));
    if region.is_none() {
        tracing::debug!(zone = %instance.zone, "no display data for region");
    }
    render_template(SuccessPageTemplate::new(instance, region))
}
