//! Provision Result
//!
//! Result types for provision operations.

use crate::domain::entities::DeploymentResult;
use crate::domain::value_objects::DeploymentTarget;

/// Result of a successful provision operation
#[derive(Debug, Clone)]
pub struct ProvisionOutcome {
    /// Environment the deployment ran for
    pub environment_name: String,
    /// Where the deployment was recorded
    pub target: DeploymentTarget,
    /// Canonicalized deployment result
    pub deployment: DeploymentResult,
    /// Whether newly entered parameter values were persisted
    pub parameters_saved: bool,
}

impl ProvisionOutcome {
    pub fn output_count(&self) -> usize {
        self.deployment.outputs().len()
    }
}
