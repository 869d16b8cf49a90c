//! Router for the post-authentication redirect endpoint

use axum::{Router, routing::get};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::success::authentication_success;

/// Create the router for the success handler
///
/// The endpoint is available at `{LR_ROUTE_PREFIX}/success` once the router is nested
/// under `LR_ROUTE_PREFIX`. The authentication layer in front of it must insert the
/// authenticated `Principal` into the request extensions; without it the request is
/// rejected with 500.
pub fn login_redirect_router() -> Router {
    login_redirect_router_no_trace().layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(true),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Create the router for the success handler without HTTP tracing
///
/// Use this if you want to add your own tracing middleware.
pub fn login_redirect_router_no_trace() -> Router {
    Router::new().route(
        "/success",
        get(authentication_success).post(authentication_success),
    )
}
