use serde_json::{Map, Value};

use shared_config::is_truthy;
use shared_models::{OperationContext, PluginError};

use crate::models::{Credentials, MONITORING_SETTINGS_KEY};

/// Connection settings resolved for one invocation.
///
/// The `nagiosrest_monitoring` object is resolved as a whole through the
/// usual layers. `address` and `instance_ip_property` fall back to the node's
/// own copy when the winning object lacks them.
#[derive(Debug, Clone, Copy)]
pub struct MonitoringSettings<'a> {
    resolved: &'a Map<String, Value>,
    node_defaults: Option<&'a Map<String, Value>>,
}

impl<'a> MonitoringSettings<'a> {
    pub fn resolve(ctx: &'a OperationContext) -> Result<Self, PluginError> {
        let resolved = ctx
            .require(MONITORING_SETTINGS_KEY)?
            .as_object()
            .ok_or_else(|| PluginError::invalid_value(MONITORING_SETTINGS_KEY, "expected an object"))?;

        let node_defaults = ctx
            .node_properties
            .get(MONITORING_SETTINGS_KEY)
            .and_then(Value::as_object);

        Ok(Self {
            resolved,
            node_defaults,
        })
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.resolved.get(key).filter(|value| !value.is_null())
    }

    fn require(&self, key: &str) -> Result<&'a Value, PluginError> {
        self.get(key)
            .ok_or_else(|| PluginError::MissingKey(format!("{}.{}", MONITORING_SETTINGS_KEY, key)))
    }

    fn require_str(&self, key: &str) -> Result<&'a str, PluginError> {
        self.require(key)?
            .as_str()
            .ok_or_else(|| PluginError::invalid_value(key, "expected a string"))
    }

    fn with_node_fallback(&self, key: &str) -> Result<&'a Value, PluginError> {
        self.get(key)
            .or_else(|| {
                self.node_defaults
                    .and_then(|defaults| defaults.get(key))
                    .filter(|value| !value.is_null())
            })
            .ok_or_else(|| PluginError::MissingKey(format!("{}.{}", MONITORING_SETTINGS_KEY, key)))
    }

    pub fn address(&self) -> Result<&'a str, PluginError> {
        self.with_node_fallback("address")?
            .as_str()
            .filter(|address| !address.is_empty())
            .ok_or_else(|| PluginError::invalid_value("address", "expected a non-empty string"))
    }

    pub fn instance_ip_property(&self) -> Result<&'a str, PluginError> {
        self.with_node_fallback("instance_ip_property")?
            .as_str()
            .ok_or_else(|| PluginError::invalid_value("instance_ip_property", "expected a string"))
    }

    /// Replacement deployment id for target URLs, if one is set and non-empty.
    pub fn deployment_override(&self) -> Option<&'a Value> {
        self.get("deployment_override").filter(|value| is_truthy(value))
    }

    pub fn target_type(&self) -> Result<&'a Value, PluginError> {
        self.require("target_type")
    }

    pub fn groups(&self) -> Result<&'a Value, PluginError> {
        self.require("groups")
    }

    pub fn credentials(&self) -> Result<Credentials, PluginError> {
        Ok(Credentials {
            username: self.require_str("username")?.to_string(),
            password: self.require_str("password")?.to_string(),
        })
    }

    pub fn certificate(&self) -> Result<&'a str, PluginError> {
        self.require_str("certificate")
    }
}
