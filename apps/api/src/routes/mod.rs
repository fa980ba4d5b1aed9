pub mod download;
pub mod health;
pub mod match_api;
pub mod upload;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Upload flow
        .route("/", get(upload::show_upload_form).post(upload::handle_upload))
        .route("/data/:filename", get(download::handle_download))
        // Matching API
        .route("/api/v1/match", post(match_api::handle_match))
        .with_state(state)
}
