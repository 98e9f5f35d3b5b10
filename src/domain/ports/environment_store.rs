//! Environment Store Port

use crate::domain::entities::Environment;
use crate::error::ProvisionResult;

/// Loading, creating and saving environments.
pub trait EnvironmentStore {
    /// Load an existing environment, or return a fresh (unsaved) one.
    fn load_or_init(&self, name: &str) -> ProvisionResult<Environment>;

    /// Check whether an environment has been persisted.
    fn exists(&self, name: &str) -> bool;

    /// Persist all environment values.
    fn save(&self, env: &Environment) -> ProvisionResult<()>;

    /// Name of the environment used when none is given explicitly.
    fn default_environment(&self) -> ProvisionResult<Option<String>>;

    /// Record the default environment.
    fn set_default(&self, name: &str) -> ProvisionResult<()>;
}
