//! Deployment target value object - where a deployment's metadata is recorded
//!
//! A subscription-scoped deployment is identified by (subscription, location,
//! deployment name). The location only decides where the deployment metadata
//! lives, not where individual resources land.

use crate::error::{ProvisionError, ProvisionResult};

/// Immutable (subscription, location, deployment name) triple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeploymentTarget {
    subscription_id: String,
    location: String,
    deployment_name: String,
}

impl DeploymentTarget {
    /// Build a target; the location must be non-empty.
    pub fn new(
        subscription_id: impl Into<String>,
        location: impl Into<String>,
        deployment_name: impl Into<String>,
    ) -> ProvisionResult<Self> {
        let location = location.into();
        if location.trim().is_empty() {
            return Err(ProvisionError::InvalidTarget(
                "a location is required to record deployment metadata".to_string(),
            ));
        }

        Ok(Self {
            subscription_id: subscription_id.into(),
            location,
            deployment_name: deployment_name.into(),
        })
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn deployment_name(&self) -> &str {
        &self.deployment_name
    }

    /// Resource id of the subscription deployment
    pub fn resource_id(&self) -> String {
        subscription_deployment_rid(&self.subscription_id, &self.deployment_name)
    }
}

/// Resource id of a subscription-scoped deployment
pub fn subscription_deployment_rid(subscription_id: &str, deployment_name: &str) -> String {
    format!(
        "/subscriptions/{}/providers/Microsoft.Resources/deployments/{}",
        subscription_id, deployment_name
    )
}
