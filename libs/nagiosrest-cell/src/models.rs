use std::fmt;
use std::str::FromStr;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared_models::PluginError;

/// Property holding the connection settings for the monitoring backend.
pub const MONITORING_SETTINGS_KEY: &str = "nagiosrest_monitoring";

/// Optional meta-group fields, sent only when truthy.
pub const META_GROUP_OPTIONAL_FIELDS: [&str; 7] = [
    "interval",
    "low_warning_threshold",
    "low_critical_threshold",
    "high_warning_threshold",
    "high_critical_threshold",
    "low_reaction",
    "high_reaction",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    AddMonitoring,
    RemoveMonitoring,
    CreateGroup,
    DeleteGroup,
    CreateMetaGroup,
    DeleteMetaGroup,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::AddMonitoring,
        Operation::RemoveMonitoring,
        Operation::CreateGroup,
        Operation::DeleteGroup,
        Operation::CreateMetaGroup,
        Operation::DeleteMetaGroup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::AddMonitoring => "add_monitoring",
            Operation::RemoveMonitoring => "remove_monitoring",
            Operation::CreateGroup => "create_group",
            Operation::DeleteGroup => "delete_group",
            Operation::CreateMetaGroup => "create_meta_group",
            Operation::DeleteMetaGroup => "delete_meta_group",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = PluginError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|operation| operation.as_str() == name)
            .ok_or_else(|| PluginError::UnknownOperation(name.to_string()))
    }
}

/// Kind of entity addressed on the nagiosrest API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Target,
    Group,
    MetaGroup,
}

impl EntityType {
    /// Collection segment in the URL path.
    pub fn collection(&self) -> &'static str {
        match self {
            EntityType::Target => "targets",
            EntityType::Group => "groups",
            EntityType::MetaGroup => "metagroups",
        }
    }
}

/// A fully planned call against the monitoring backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl BackendRequest {
    pub fn put(url: String, body: Value) -> Self {
        Self {
            method: Method::PUT,
            url,
            body: Some(body),
        }
    }

    pub fn delete(url: String) -> Self {
        Self {
            method: Method::DELETE,
            url,
            body: None,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetPayload {
    pub instance_ip: Value,
    pub target_type: Value,
    pub groups: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupPayload {
    pub reaction_target: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetaGroupPayload {
    pub approach: Value,
    pub unknown: Value,
    pub target: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_warning_threshold: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_critical_threshold: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_warning_threshold: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_critical_threshold: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_reaction: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_reaction: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationResponse {
    pub invocation_id: String,
    pub operation: Operation,
    pub status: &'static str,
}
