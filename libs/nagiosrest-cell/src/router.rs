use axum::{routing::post, Router};
use std::sync::Arc;

use crate::handlers::{invoke_operation, NagiosRestHandlers};
use shared_config::AppConfig;

pub fn nagiosrest_routes(config: Arc<AppConfig>) -> Router {
    let handlers = Arc::new(NagiosRestHandlers::new(&config));
    routes_with_handlers(handlers)
}

pub fn routes_with_handlers(handlers: Arc<NagiosRestHandlers>) -> Router {
    Router::new()
        .route("/operations/{operation}", post(invoke_operation))
        .with_state(handlers)
}
