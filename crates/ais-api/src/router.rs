//! Route definitions for the AISv3 inventory HTTP API.
//!
//! Everything is mounted under `/api/inventory/{agent_id}`. The protocol
//! routes its MOVE/COPY verbs through the same paths as the standard
//! methods, so resources register with `any()` and the handlers dispatch
//! on the method string.

use axum::{Router, extract::DefaultBodyLimit, routing::any};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let inventory_routes = Router::new()
        .route("/category/{token}", any(handlers::category::dispatch))
        .route(
            "/category/{token}/children",
            any(handlers::category::children),
        )
        .route("/category/{token}/items", any(handlers::category::items))
        .route("/category/{token}/links", any(handlers::category::links))
        .route(
            "/category/{token}/categories",
            any(handlers::category::categories),
        )
        .route("/item/{id}", any(handlers::item::dispatch));

    Router::new()
        .nest("/api/inventory/{agent_id}", inventory_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
