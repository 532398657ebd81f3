//! # nagiosrest Cell
//!
//! Registers and deregisters monitoring targets, groups and meta-groups
//! against a nagiosrest backend on behalf of an orchestration host.
//!
//! ## Architecture
//!
//! ```text
//! +-----------------------------------------------------+
//! |                  nagiosrest Cell                    |
//! +-----------------------------------------------------+
//! |  handlers.rs    |  Operation invocation endpoint    |
//! |  router.rs      |  Route definitions                |
//! |  models.rs      |  Operations, payloads, requests   |
//! |  services/      |                                   |
//! |    settings.rs  |  nagiosrest_monitoring lookup     |
//! |    urls.rs      |  Endpoint URL construction        |
//! |    requests.rs  |  Per-operation request planning   |
//! |    cert.rs      |  Scoped certificate staging       |
//! |    client.rs    |  HTTP call + status classification|
//! |    operations.rs|  The six operations               |
//! +-----------------------------------------------------+
//! ```
//!
//! ## Endpoints
//!
//! - `POST /operations/{operation}` - run `add_monitoring`, `remove_monitoring`,
//!   `create_group`, `delete_group`, `create_meta_group` or `delete_meta_group`
//!   with the posted `OperationContext`
//!
//! Failures answer with `{"error", "kind", "recoverable"}`. The host retries
//! when `recoverable` is true and aborts the workflow otherwise.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use nagiosrest_cell::NagiosRestService;
//! use shared_config::AppConfig;
//! use shared_models::OperationContext;
//!
//! # async fn example(ctx: OperationContext) -> Result<(), shared_models::PluginError> {
//! let service = NagiosRestService::new(&AppConfig::from_env());
//! service.add_monitoring(&ctx).await?;
//! # Ok(())
//! # }
//! ```

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export commonly used types
pub use models::{BackendRequest, Credentials, EntityType, Operation, OperationResponse};

pub use services::{MonitoringSettings, NagiosRestClient, NagiosRestService};

pub use router::nagiosrest_routes;
