use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Routes relative to the `/api` prefix the server nests them under.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/lookup", get(handlers::lookup))
        .route("/batch", post(handlers::run_batch))
        .route("/batch/export", post(handlers::export_batch))
        .route("/record-types", get(handlers::get_record_types))
        .route("/nameservers", get(handlers::get_nameservers))
        .with_state(state)
}
