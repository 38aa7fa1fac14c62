pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/health", get(health::health_handler))
        .route(
            "/generate-documents",
            post(handlers::handle_generate_documents),
        )
        .route("/download/:filename", get(handlers::handle_download))
        .with_state(state)
}
