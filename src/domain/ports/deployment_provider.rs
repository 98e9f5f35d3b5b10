//! Deployment Provider Port
//!
//! The cloud side of provisioning. `deploy` blocks for the whole deployment
//! (often minutes) and is run off the foreground thread by the deployment
//! driver, hence the `Send + Sync` bound.

use std::path::Path;

use crate::domain::entities::{DeploymentResult, Location, ResourceOperation};
use crate::domain::value_objects::{CancellationToken, DeploymentTarget};
use crate::error::ProvisionResult;

/// Operations against the deployment service.
pub trait DeploymentProvider: Send + Sync {
    /// Run a subscription-scoped deployment to completion.
    ///
    /// Implementations must watch `cancel` and abort the in-flight call,
    /// returning `ProvisionError::Cancelled`.
    fn deploy(
        &self,
        target: &DeploymentTarget,
        template_path: &Path,
        parameters_path: &Path,
        cancel: &CancellationToken,
    ) -> ProvisionResult<DeploymentResult>;

    /// Current operations of a subscription deployment.
    fn get_deployment_resource_operations(
        &self,
        subscription_id: &str,
        deployment_name: &str,
    ) -> ProvisionResult<Vec<ResourceOperation>>;

    /// Current state of a subscription deployment.
    fn get_subscription_deployment(
        &self,
        subscription_id: &str,
        deployment_name: &str,
    ) -> ProvisionResult<DeploymentResult>;

    /// Locations available to the subscription.
    fn list_locations(&self, subscription_id: &str) -> ProvisionResult<Vec<Location>>;
}

/// Verifies that the user is signed in to the deployment service.
pub trait LoginChecker {
    fn ensure_logged_in(&self) -> ProvisionResult<()>;
}

/// Login checker that always succeeds (tests, pre-authenticated CI).
pub struct AssumeLoggedIn;

impl LoginChecker for AssumeLoggedIn {
    fn ensure_logged_in(&self) -> ProvisionResult<()> {
        Ok(())
    }
}
