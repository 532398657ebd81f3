use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_config::{resolver, PropertyBag};

use crate::error::PluginError;

/// Everything the orchestration host hands to a single operation invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationContext {
    #[serde(default)]
    pub tenant_name: String,
    pub deployment_id: String,
    pub instance_id: String,
    #[serde(default)]
    pub node_properties: PropertyBag,
    #[serde(default)]
    pub runtime_properties: PropertyBag,
    /// Per-call operation inputs. Highest precedence.
    #[serde(default)]
    pub inputs: PropertyBag,
}

impl OperationContext {
    pub fn resolve(&self, key: &str) -> Option<&Value> {
        resolver::resolve(
            key,
            &self.inputs,
            &self.runtime_properties,
            &self.node_properties,
        )
    }

    pub fn resolve_truthy(&self, key: &str) -> Option<&Value> {
        resolver::resolve_truthy(
            key,
            &self.inputs,
            &self.runtime_properties,
            &self.node_properties,
        )
    }

    pub fn require(&self, key: &str) -> Result<&Value, PluginError> {
        self.resolve(key)
            .ok_or_else(|| PluginError::MissingKey(key.to_string()))
    }

    pub fn tenant(&self) -> Result<&str, PluginError> {
        if self.tenant_name.is_empty() {
            return Err(PluginError::MissingKey("tenant_name".to_string()));
        }
        Ok(&self.tenant_name)
    }
}
