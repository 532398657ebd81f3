use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, Instrument};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::{OperationContext, PluginError};

use crate::models::{Operation, OperationResponse};
use crate::services::NagiosRestService;

pub struct NagiosRestHandlers {
    service: NagiosRestService,
}

impl NagiosRestHandlers {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            service: NagiosRestService::new(config),
        }
    }

    pub fn with_service(service: NagiosRestService) -> Self {
        Self { service }
    }
}

pub async fn invoke_operation(
    State(handlers): State<Arc<NagiosRestHandlers>>,
    Path(operation): Path<String>,
    body: Result<Json<OperationContext>, JsonRejection>,
) -> Result<Json<OperationResponse>, PluginError> {
    let operation: Operation = operation.parse()?;
    let Json(ctx) = body?;
    let invocation_id = Uuid::new_v4().to_string();
    let span = tracing::info_span!("invocation", id = %invocation_id, operation = %operation);

    info!(parent: &span, "Invoking {}", operation);
    handlers
        .service
        .run(operation, &ctx)
        .instrument(span)
        .await?;

    Ok(Json(OperationResponse {
        invocation_id,
        operation,
        status: "succeeded",
    }))
}
