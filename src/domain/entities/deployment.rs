//! Deployment entities
//!
//! Shapes returned by the deployment provider. Only the fields provisioning
//! reads are typed; everything else is kept in flattened maps so the
//! structured output carries the provider's full payload.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Provisioning state reported for a finished sub-step
pub const SUCCEEDED: &str = "Succeeded";

/// A single deployment output (`{ "type": ..., "value": ... }`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeploymentOutput {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub value: Value,
}

impl DeploymentOutput {
    pub fn new(kind: impl Into<String>, value: Value) -> Self {
        Self {
            kind: kind.into(),
            value,
        }
    }

    /// Render the value for storage in an environment file.
    ///
    /// Strings are stored verbatim; anything else is stored as compact JSON.
    pub fn value_as_env_string(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Properties block of a deployment
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentProperties {
    #[serde(default)]
    pub outputs: BTreeMap<String, DeploymentOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of a subscription-scoped deployment
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeploymentResult {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub properties: DeploymentProperties,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeploymentResult {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_output(mut self, key: impl Into<String>, output: DeploymentOutput) -> Self {
        self.properties.outputs.insert(key.into(), output);
        self
    }

    pub fn outputs(&self) -> &BTreeMap<String, DeploymentOutput> {
        &self.properties.outputs
    }
}

/// Resource targeted by a deployment operation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetResource {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub resource_name: String,
}

/// Properties of a deployment operation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOperationProperties {
    #[serde(default)]
    pub provisioning_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_resource: Option<TargetResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One sub-step of a deployment. Transient; fetched per poll, never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOperation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub operation_id: String,
    #[serde(default)]
    pub properties: ResourceOperationProperties,
}

impl ResourceOperation {
    pub fn new(operation_id: impl Into<String>, provisioning_state: impl Into<String>) -> Self {
        Self {
            operation_id: operation_id.into(),
            properties: ResourceOperationProperties {
                provisioning_state: provisioning_state.into(),
                ..ResourceOperationProperties::default()
            },
            ..Self::default()
        }
    }

    pub fn with_target(mut self, resource_type: &str, resource_id: &str) -> Self {
        let resource_name = resource_id.rsplit('/').next().unwrap_or_default().to_string();
        self.properties.target_resource = Some(TargetResource {
            id: resource_id.to_string(),
            resource_type: resource_type.to_string(),
            resource_name,
        });
        self
    }

    pub fn succeeded(&self) -> bool {
        self.properties.provisioning_state == SUCCEEDED
    }

    /// Target resource type, if the operation targets a resource
    pub fn target_type(&self) -> Option<&str> {
        self.properties
            .target_resource
            .as_ref()
            .map(|t| t.resource_type.as_str())
    }
}

/// Timestamped snapshot of deployment operations, emitted in structured mode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub timestamp: DateTime<Utc>,
    pub operations: Vec<ResourceOperation>,
}

impl ProgressReport {
    pub fn now(operations: Vec<ResourceOperation>) -> Self {
        Self {
            timestamp: Utc::now(),
            operations,
        }
    }
}

/// An available deployment location
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

impl Location {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
        }
    }
}
