use std::sync::Arc;

use axum::{routing::get, Router};

use nagiosrest_cell::router::nagiosrest_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "nagiosrest executor is running!" }))
        .merge(nagiosrest_routes(state))
}
