//! Deployment output canonicalization and persistence
//!
//! Providers may return output names in a different casing than the template
//! declares (`websitE_URL` for `WEBSITE_URL`) and capitalized types (`String`
//! for `string`). Canonicalization rewrites both to the declared schema.

use std::collections::BTreeMap;

use crate::domain::entities::{DeploymentOutput, DeploymentResult, Environment, Template};
use crate::domain::ports::EnvironmentStore;
use crate::error::ProvisionResult;

/// Rewrite output keys and types to the template's declared outputs.
///
/// Keys are matched case-insensitively; undeclared keys pass through
/// unchanged. Applying this to an already canonical mapping is a no-op.
pub fn canonicalize_outputs(
    template: &Template,
    outputs: &BTreeMap<String, DeploymentOutput>,
) -> BTreeMap<String, DeploymentOutput> {
    let declared: BTreeMap<String, (&String, &str)> = template
        .outputs
        .iter()
        .map(|(name, decl)| (name.to_lowercase(), (name, decl.kind.as_str())))
        .collect();

    outputs
        .iter()
        .map(|(key, output)| match declared.get(&key.to_lowercase()) {
            Some((name, kind)) => {
                let mut output = output.clone();
                if !kind.is_empty() {
                    output.kind = kind.to_string();
                }
                ((*name).clone(), output)
            }
            None => (key.clone(), output.clone()),
        })
        .collect()
}

/// Canonicalize a deployment result's outputs in place.
pub fn canonicalize_result(template: &Template, result: &mut DeploymentResult) {
    result.properties.outputs = canonicalize_outputs(template, &result.properties.outputs);
}

/// Merge outputs into the environment values and save the environment.
///
/// Output values win over existing values with the same key.
pub fn persist_outputs(
    outputs: &BTreeMap<String, DeploymentOutput>,
    env: &mut Environment,
    store: &dyn EnvironmentStore,
) -> ProvisionResult<()> {
    env.merge(
        outputs
            .iter()
            .map(|(name, output)| (name.clone(), output.value_as_env_string())),
    );
    store.save(env)
}
