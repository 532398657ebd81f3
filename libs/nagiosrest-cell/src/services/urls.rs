use serde_json::Value;

use shared_models::{OperationContext, PluginError};

use crate::models::EntityType;
use crate::services::settings::MonitoringSettings;

pub fn base_url(entity_type: EntityType, address: &str, tenant: &str) -> String {
    format!(
        "https://{}/nagiosrest/{}/{}",
        address,
        entity_type.collection(),
        tenant
    )
}

/// `.../targets/{tenant}/{deployment}/{instance}`
pub fn instance_url(ctx: &OperationContext) -> Result<String, PluginError> {
    let settings = MonitoringSettings::resolve(ctx)?;
    let deployment = match settings.deployment_override() {
        Some(value) => path_segment("deployment_override", value)?,
        None => ctx.deployment_id.clone(),
    };

    Ok(format!(
        "{}/{}/{}",
        base_url(EntityType::Target, settings.address()?, ctx.tenant()?),
        deployment,
        ctx.instance_id
    ))
}

/// `.../groups/{tenant}/{group_type}/{group_name}`
pub fn group_url(ctx: &OperationContext) -> Result<String, PluginError> {
    let settings = MonitoringSettings::resolve(ctx)?;

    Ok(format!(
        "{}/{}/{}",
        base_url(EntityType::Group, settings.address()?, ctx.tenant()?),
        resolved_segment(ctx, "group_type")?,
        resolved_segment(ctx, "group_name")?
    ))
}

/// `.../metagroups/{tenant}/{group_type}/{group_instance_prefix}`
pub fn meta_group_url(ctx: &OperationContext) -> Result<String, PluginError> {
    let settings = MonitoringSettings::resolve(ctx)?;

    Ok(format!(
        "{}/{}/{}",
        base_url(EntityType::MetaGroup, settings.address()?, ctx.tenant()?),
        resolved_segment(ctx, "group_type")?,
        resolved_segment(ctx, "group_instance_prefix")?
    ))
}

fn resolved_segment(ctx: &OperationContext, key: &str) -> Result<String, PluginError> {
    path_segment(key, ctx.require(key)?)
}

fn path_segment(key: &str, value: &Value) -> Result<String, PluginError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        _ => Err(PluginError::invalid_value(key, "expected a scalar usable in a URL")),
    }
}
