//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests (`tests/common/mod.rs`) use the exact same
//! middleware stack.

use std::any::Any as PanicPayload;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::response::ApiResponse;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
///
/// `/health` is always served at the root. When an API prefix is configured
/// the note routes, the service info route and a second `/health` live under
/// it; with an empty prefix they are merged at the root.
///
/// The middleware stack is applied bottom-up:
///
/// 1. CORS
/// 2. Set request ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate request ID to response
/// 5. Request timeout
/// 6. Panic recovery (catch panics, render the failure envelope)
///
/// A request that exceeds the timeout gets a bare `408` from the timeout
/// layer; that is a transport-level failure and carries no envelope.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);
    let request_id_header = HeaderName::from_static("x-request-id");

    let app = Router::new().merge(routes::health::router());
    let app = if config.api_prefix.is_empty() {
        app.merge(routes::api_routes())
    } else {
        app.nest(
            &config.api_prefix,
            routes::api_routes().merge(routes::health::router()),
        )
    };

    app
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and answer with the failure envelope.
        .layer(CatchPanicLayer::custom(handle_panic))
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // CORS.
        .layer(cors)
        // Shared state.
        .with_state(state)
}

/// Render a panic caught in a handler as the failure envelope.
///
/// The panic message is logged, never sent to the client.
pub fn handle_panic(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "Handler panicked");

    ApiResponse::failure("Internal server error").into_response()
}

/// Build the CORS middleware layer from server configuration.
///
/// A `*` origin allows any origin without credentials (browsers refuse
/// credentialed wildcard responses). Origins are validated when the config
/// is loaded, so unparsable entries cannot reach this point.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    layer.allow_origin(origins).allow_credentials(true)
}
