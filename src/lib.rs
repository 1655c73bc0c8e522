// Library crate for the environments API
// Exports modules for use by the Lambda binary, the local server and tests

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;

use axum::{
    routing::post,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::create_environment;
use crate::state::AppState;

/// Build the local HTTP router with the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/environments", post(create_environment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
