//! Parameter resolution
//!
//! Works out which declared template parameters still need a value, asks for
//! them, persists what changed and settles the deployment location.
//!
//! The flow per declared parameter without a default:
//!
//! ```text
//! configured? ──yes──> keep
//!     │no
//! interactive? ──no──> MissingParameter
//!     │yes
//! ask value ──> offer to save into the environment ──> mark updated
//! ```

use serde_json::Value;

use crate::domain::entities::{Environment, Location, Template};
use crate::domain::ports::{EnvironmentStore, ParameterStore, Prompter};
use crate::domain::value_objects::ConfiguredParameters;
use crate::error::{ProvisionError, ProvisionResult};

/// Name of the parameter whose value doubles as the deployment location
pub const LOCATION_PARAMETER: &str = "location";

const SAVE_PROMPT: &str = "Save the value in the environment for future use";
const LOCATION_PROMPT: &str = "Please select an Azure location to use to store deployment metadata:";

/// Outcome of parameter resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Full configured parameter set (existing plus newly solicited values)
    pub parameters: ConfiguredParameters,
    /// Location taken from the `location` parameter, if it has a string value
    pub location: Option<String>,
    /// Whether any value was newly solicited
    pub updated: bool,
}

/// Resolves template parameters against previously configured values.
pub struct ParameterResolver<'a> {
    prompter: &'a dyn Prompter,
    interactive: bool,
}

impl<'a> ParameterResolver<'a> {
    pub fn new(prompter: &'a dyn Prompter, interactive: bool) -> Self {
        Self {
            prompter,
            interactive,
        }
    }

    /// Fill in every required parameter missing from `existing`.
    ///
    /// Values the user chooses to save are written into `env` (in memory
    /// only; see [`persist_resolution`]).
    pub fn resolve(
        &self,
        template: &Template,
        existing: ConfiguredParameters,
        env: &mut Environment,
    ) -> ProvisionResult<Resolution> {
        let mut parameters = existing;
        let mut updated = false;
        let mut location = None;

        for (name, _) in template.required_parameters() {
            if !parameters.contains(name) {
                if !self.interactive {
                    return Err(ProvisionError::MissingParameter { name: name.clone() });
                }

                let value = self.solicit(name)?;
                parameters.insert(name.clone(), Value::String(value.clone()));

                let save = self
                    .prompter
                    .ask_confirm(SAVE_PROMPT, true)
                    .map_err(|e| {
                        ProvisionError::Prompt(format!("saving deployment parameter: {}", e))
                    })?;
                if save {
                    env.set(name.clone(), value);
                }

                updated = true;
            }

            if name == LOCATION_PARAMETER {
                location = parameters
                    .get(name)
                    .and_then(Value::as_str)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string);
            }
        }

        tracing::debug!(
            configured = parameters.len(),
            updated,
            has_location = location.is_some(),
            "resolved template parameters"
        );

        Ok(Resolution {
            parameters,
            location,
            updated,
        })
    }

    fn solicit(&self, name: &str) -> ProvisionResult<String> {
        let message = format!(
            "Please enter a value for the '{}' deployment parameter:",
            name
        );
        self.prompter
            .ask_input(&message, None)
            .map_err(|e| ProvisionError::Prompt(format!("deployment parameter: {}", e)))
    }

    /// Settle the deployment location.
    ///
    /// A location resolved from the `location` parameter wins. Otherwise the
    /// user is asked until a non-empty value comes back; only a prompt
    /// failure ends the loop early. `locations` is consulted once, lazily,
    /// to offer a pick list; an empty list falls back to free-form input.
    pub fn resolve_location<F>(
        &self,
        resolved: Option<String>,
        env: &Environment,
        locations: F,
    ) -> ProvisionResult<String>
    where
        F: FnOnce() -> Vec<Location>,
    {
        if let Some(location) = resolved.filter(|l| !l.is_empty()) {
            return Ok(location);
        }

        let locations = locations();
        loop {
            let selected = self.prompt_location(&locations, env).map_err(|e| {
                ProvisionError::Prompt(format!("deployment metadata region: {}", e))
            })?;
            if !selected.trim().is_empty() {
                return Ok(selected.trim().to_string());
            }
        }
    }

    fn prompt_location(
        &self,
        locations: &[Location],
        env: &Environment,
    ) -> Result<String, crate::domain::ports::PromptError> {
        if locations.is_empty() {
            return self.prompter.ask_input(LOCATION_PROMPT, env.location());
        }

        let items: Vec<String> = locations
            .iter()
            .map(|l| format!("{:<30} ({})", l.display_name, l.name))
            .collect();
        let default = env
            .location()
            .and_then(|current| locations.iter().position(|l| l.name == current))
            .unwrap_or(0);

        let index = self.prompter.ask_select(LOCATION_PROMPT, &items, default)?;
        Ok(locations
            .get(index)
            .map(|l| l.name.clone())
            .unwrap_or_default())
    }
}

/// Persist a resolution that solicited new values.
///
/// Writes the configured parameter set first, then the environment. The two
/// writes are independent: a failure in the second leaves the first in place.
/// Returns `false` when nothing needed writing.
pub fn persist_resolution(
    resolution: &Resolution,
    env: &Environment,
    module: &str,
    parameter_store: &dyn ParameterStore,
    environment_store: &dyn EnvironmentStore,
) -> ProvisionResult<bool> {
    if !resolution.updated {
        return Ok(false);
    }

    parameter_store.write_configured(env.name(), module, &resolution.parameters)?;
    environment_store.save(env)?;
    Ok(true)
}
