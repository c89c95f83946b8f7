//! Movie catalogue HTTP API server (Axum).
//!
//! Serves list/get/create/update/delete over JSON for the in-memory
//! collection held by [`movie_core::MovieStore`].

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;
use tower_http::trace::TraceLayer;

/// Build the application router over a freshly seeded store.
pub fn app() -> Router {
    app_with_state(AppState::new())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::movie_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
