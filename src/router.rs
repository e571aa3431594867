use std::time::Duration;

use axum::{Router, routing::get};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, Span, error_span};
use uuid::Uuid;

use pokedex_error::anyhow;

use crate::{
    pokemon,
    state::{AppState, create_production_state},
};

/// Creates the router with dependency-injected state.
///
/// This function is pub for use by tests. Production code should use
/// `router()`.
pub fn create_router_with_state(state: AppState) -> Router {
    let default_on_response_trace_handler = DefaultOnResponse::new().level(Level::INFO);

    Router::new()
        .route("/health", get(|| async { "Ok" }))
        .route(
            "/v1/pokemon/:pokedex_entry_number",
            get(pokemon::pokemon_by_entry),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    use tracing::field::Empty;

                    let span = error_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %Uuid::now_v7(),
                        "X-Request-ID" = Empty,
                        version = ?request.version(),
                    );

                    if let Some(x_request_id) = request.headers().get("X-Request-ID") {
                        span.record("X-Request-ID", tracing::field::debug(x_request_id));
                    }

                    span
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                        use tower_http::trace::OnResponse;

                        // Skip logging 5xx responses. These are already logged by the default on_failure handler.
                        if !response.status().is_server_error() {
                            default_on_response_trace_handler.on_response(response, latency, span);
                        }
                    },
                ),
        )
        .with_state(state)
}

/// Creates the router with production state.
///
/// This is the main entry point for production code. It loads the Pokedex
/// store and wires the lookup service before creating the router.
pub fn router() -> anyhow::Result<Router> {
    let state = create_production_state()?;

    Ok(create_router_with_state(state))
}
