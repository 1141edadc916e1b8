//! Route table and application assembly.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::{
    ApiConfig, card, metrics,
    middleware::{cors, request_id, security_headers},
    state::ApiState,
};

/// API routes, without state or middleware
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(ready))
        .nest("/api", card::routes())
        .fallback(handler_404)
}

/// Build the complete application: routes, state and the middleware stack
pub fn app(config: &ApiConfig, state: ApiState) -> Router {
    let cors = cors::create_cors_layer(config.parsed_allowed_origins());

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let app = router()
        .with_state(state)
        .layer(cors)
        .layer(trace_layer)
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(middleware::from_fn(request_id::request_id_middleware));

    security_headers::apply_security_headers(app, config.env.clone())
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn ready(State(state): State<ApiState>) -> Json<Value> {
    Json(json!({
        "status": "ready",
        "cards": state.catalog.len()
    }))
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
