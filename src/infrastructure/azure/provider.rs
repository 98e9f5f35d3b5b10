//! Deployment provider backed by the Azure CLI
//!
//! Subscription-scoped deployments via `az deployment sub`, status via
//! `az deployment operation`, and a login probe via `az account show`.

use std::path::Path;

use crate::domain::entities::{DeploymentResult, Location, ResourceOperation};
use crate::domain::ports::{DeploymentProvider, LoginChecker};
use crate::domain::value_objects::{CancellationToken, DeploymentTarget};
use crate::error::{ProvisionError, ProvisionResult};

use super::cli::AzCli;

const NESTED_DEPLOYMENT_TYPE: &str = "Microsoft.Resources/deployments";
const MAX_NESTING: usize = 8;

/// `DeploymentProvider` that shells out to `az`
#[derive(Debug, Clone, Default)]
pub struct AzCliDeploymentProvider {
    cli: AzCli,
}

impl AzCliDeploymentProvider {
    pub fn new(cli: AzCli) -> Self {
        Self { cli }
    }

    fn group_operations(
        &self,
        subscription_id: &str,
        resource_group: &str,
        deployment_name: &str,
    ) -> ProvisionResult<Vec<ResourceOperation>> {
        self.cli.run_json(&[
            "deployment",
            "operation",
            "group",
            "list",
            "--subscription",
            subscription_id,
            "--resource-group",
            resource_group,
            "--name",
            deployment_name,
            "--output",
            "json",
        ])
    }

    /// Replace nested deployment operations with the operations they ran.
    fn expand_nested(
        &self,
        subscription_id: &str,
        operations: Vec<ResourceOperation>,
        depth: usize,
        out: &mut Vec<ResourceOperation>,
    ) -> ProvisionResult<()> {
        for op in operations {
            let Some(target) = op.properties.target_resource.as_ref() else {
                continue;
            };

            if !target.resource_type.eq_ignore_ascii_case(NESTED_DEPLOYMENT_TYPE) {
                out.push(op);
                continue;
            }

            let nested = match resource_group_of(&target.id) {
                Some(group) if depth < MAX_NESTING => {
                    self.group_operations(subscription_id, group, &target.resource_name)?
                }
                _ => {
                    tracing::debug!(id = %target.id, depth, "not expanding nested deployment");
                    continue;
                }
            };
            self.expand_nested(subscription_id, nested, depth + 1, out)?;
        }
        Ok(())
    }
}

impl DeploymentProvider for AzCliDeploymentProvider {
    fn deploy(
        &self,
        target: &DeploymentTarget,
        template_path: &Path,
        parameters_path: &Path,
        cancel: &CancellationToken,
    ) -> ProvisionResult<DeploymentResult> {
        let template = template_path.to_string_lossy();
        let parameters = format!("@{}", parameters_path.display());
        let args = [
            "deployment",
            "sub",
            "create",
            "--subscription",
            target.subscription_id(),
            "--name",
            target.deployment_name(),
            "--location",
            target.location(),
            "--template-file",
            &*template,
            "--parameters",
            parameters.as_str(),
            "--output",
            "json",
        ];

        let stdout = self.cli.run_cancellable(&args, cancel).map_err(|e| match e {
            ProvisionError::Provider(message) => ProvisionError::Deployment(message),
            other => other,
        })?;
        serde_json::from_str(&stdout).map_err(|e| {
            ProvisionError::Deployment(format!("unreadable deployment result: {}", e))
        })
    }

    fn get_deployment_resource_operations(
        &self,
        subscription_id: &str,
        deployment_name: &str,
    ) -> ProvisionResult<Vec<ResourceOperation>> {
        let top: Vec<ResourceOperation> = self.cli.run_json(&[
            "deployment",
            "operation",
            "sub",
            "list",
            "--subscription",
            subscription_id,
            "--name",
            deployment_name,
            "--output",
            "json",
        ])?;

        let mut operations = Vec::with_capacity(top.len());
        self.expand_nested(subscription_id, top, 0, &mut operations)?;
        Ok(operations)
    }

    fn get_subscription_deployment(
        &self,
        subscription_id: &str,
        deployment_name: &str,
    ) -> ProvisionResult<DeploymentResult> {
        self.cli.run_json(&[
            "deployment",
            "sub",
            "show",
            "--subscription",
            subscription_id,
            "--name",
            deployment_name,
            "--output",
            "json",
        ])
    }

    fn list_locations(&self, subscription_id: &str) -> ProvisionResult<Vec<Location>> {
        let mut locations: Vec<Location> = self.cli.run_json(&[
            "account",
            "list-locations",
            "--subscription",
            subscription_id,
            "--output",
            "json",
        ])?;
        locations.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        Ok(locations)
    }
}

/// Login probe: `az account show` succeeds only with an active sign-in.
#[derive(Debug, Clone, Default)]
pub struct AzLoginChecker {
    cli: AzCli,
}

impl AzLoginChecker {
    pub fn new(cli: AzCli) -> Self {
        Self { cli }
    }
}

impl LoginChecker for AzLoginChecker {
    fn ensure_logged_in(&self) -> ProvisionResult<()> {
        self.cli
            .run(&["account", "show", "--output", "none"])
            .map(|_| ())
            .map_err(|e| {
                ProvisionError::Login(format!("{} (run '{} login')", e, self.cli.program()))
            })
    }
}

/// Resource group segment of a resource id
fn resource_group_of(resource_id: &str) -> Option<&str> {
    let mut segments = resource_id.split('/');
    while let Some(segment) = segments.next() {
        if segment.eq_ignore_ascii_case("resourceGroups") {
            return segments.next().filter(|g| !g.is_empty());
        }
    }
    None
}
