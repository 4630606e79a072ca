//! Router assembly.

pub mod events;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full API router with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1", post(events::create_event))
        .route(
            "/api/v1/events",
            get(events::list_events).post(events::create_event),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
