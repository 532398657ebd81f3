use tracing::{info, instrument};

use shared_config::AppConfig;
use shared_models::{OperationContext, PluginError};

use crate::models::Operation;
use crate::services::client::NagiosRestClient;
use crate::services::requests;
use crate::services::settings::MonitoringSettings;

/// The six monitoring operations the host can invoke.
///
/// Each one resolves its configuration afresh, makes exactly one backend
/// call, and keeps no state between invocations.
#[derive(Debug, Clone, Default)]
pub struct NagiosRestService {
    client: NagiosRestClient,
}

impl NagiosRestService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: NagiosRestClient::new(config),
        }
    }

    pub fn with_client(client: NagiosRestClient) -> Self {
        Self { client }
    }

    #[instrument(
        skip(self, ctx),
        fields(
            tenant = %ctx.tenant_name,
            deployment = %ctx.deployment_id,
            instance = %ctx.instance_id
        )
    )]
    pub async fn run(&self, operation: Operation, ctx: &OperationContext) -> Result<(), PluginError> {
        let request = requests::plan(operation, ctx)?;
        let settings = MonitoringSettings::resolve(ctx)?;
        let credentials = settings.credentials()?;
        let certificate = settings.certificate()?;

        self.client.call(&request, &credentials, certificate).await?;

        info!("{} completed against {}", operation, request.url);
        Ok(())
    }

    pub async fn add_monitoring(&self, ctx: &OperationContext) -> Result<(), PluginError> {
        self.run(Operation::AddMonitoring, ctx).await
    }

    pub async fn remove_monitoring(&self, ctx: &OperationContext) -> Result<(), PluginError> {
        self.run(Operation::RemoveMonitoring, ctx).await
    }

    pub async fn create_group(&self, ctx: &OperationContext) -> Result<(), PluginError> {
        self.run(Operation::CreateGroup, ctx).await
    }

    pub async fn delete_group(&self, ctx: &OperationContext) -> Result<(), PluginError> {
        self.run(Operation::DeleteGroup, ctx).await
    }

    pub async fn create_meta_group(&self, ctx: &OperationContext) -> Result<(), PluginError> {
        self.run(Operation::CreateMetaGroup, ctx).await
    }

    pub async fn delete_meta_group(&self, ctx: &OperationContext) -> Result<(), PluginError> {
        self.run(Operation::DeleteMetaGroup, ctx).await
    }
}
