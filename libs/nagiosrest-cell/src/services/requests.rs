//! Turns an invocation context into the backend call each operation makes.

use serde_json::Value;

use shared_models::{OperationContext, PluginError};

use crate::models::{
    BackendRequest, GroupPayload, MetaGroupPayload, Operation, TargetPayload,
};
use crate::services::settings::MonitoringSettings;
use crate::services::urls;

pub fn plan(operation: Operation, ctx: &OperationContext) -> Result<BackendRequest, PluginError> {
    match operation {
        Operation::AddMonitoring => add_monitoring(ctx),
        Operation::RemoveMonitoring => remove_monitoring(ctx),
        Operation::CreateGroup => create_group(ctx),
        Operation::DeleteGroup => delete_group(ctx),
        Operation::CreateMetaGroup => create_meta_group(ctx),
        Operation::DeleteMetaGroup => delete_meta_group(ctx),
    }
}

pub fn add_monitoring(ctx: &OperationContext) -> Result<BackendRequest, PluginError> {
    let settings = MonitoringSettings::resolve(ctx)?;
    let url = urls::instance_url(ctx)?;

    let payload = TargetPayload {
        instance_ip: instance_ip(ctx, &settings)?.clone(),
        target_type: settings.target_type()?.clone(),
        groups: settings.groups()?.clone(),
    };

    Ok(BackendRequest::put(url, to_body(&payload)?))
}

pub fn remove_monitoring(ctx: &OperationContext) -> Result<BackendRequest, PluginError> {
    Ok(BackendRequest::delete(urls::instance_url(ctx)?))
}

pub fn create_group(ctx: &OperationContext) -> Result<BackendRequest, PluginError> {
    let payload = GroupPayload {
        reaction_target: ctx.require("reaction_target")?.clone(),
    };

    Ok(BackendRequest::put(urls::group_url(ctx)?, to_body(&payload)?))
}

pub fn delete_group(ctx: &OperationContext) -> Result<BackendRequest, PluginError> {
    Ok(BackendRequest::delete(urls::group_url(ctx)?))
}

pub fn create_meta_group(ctx: &OperationContext) -> Result<BackendRequest, PluginError> {
    let optional = |key: &str| ctx.resolve_truthy(key).cloned();

    let payload = MetaGroupPayload {
        approach: ctx.require("approach")?.clone(),
        unknown: ctx.require("unknown")?.clone(),
        target: ctx.require("target")?.clone(),
        interval: optional("interval"),
        low_warning_threshold: optional("low_warning_threshold"),
        low_critical_threshold: optional("low_critical_threshold"),
        high_warning_threshold: optional("high_warning_threshold"),
        high_critical_threshold: optional("high_critical_threshold"),
        low_reaction: optional("low_reaction"),
        high_reaction: optional("high_reaction"),
    };

    Ok(BackendRequest::put(urls::meta_group_url(ctx)?, to_body(&payload)?))
}

pub fn delete_meta_group(ctx: &OperationContext) -> Result<BackendRequest, PluginError> {
    Ok(BackendRequest::delete(urls::meta_group_url(ctx)?))
}

/// The instance IP lives in whichever property `instance_ip_property` names.
/// Runtime properties take priority over node properties.
fn instance_ip<'a>(
    ctx: &'a OperationContext,
    settings: &MonitoringSettings<'a>,
) -> Result<&'a Value, PluginError> {
    let property = settings.instance_ip_property()?;

    ctx.runtime_properties
        .get(property)
        .or_else(|| ctx.node_properties.get(property))
        .ok_or_else(|| PluginError::MissingKey(property.to_string()))
}

fn to_body<T: serde::Serialize>(payload: &T) -> Result<Value, PluginError> {
    serde_json::to_value(payload).map_err(|e| PluginError::invalid_value("body", e.to_string()))
}
