//! Parameter Store Port
//!
//! Reads and writes the configured parameter set of an (environment, module)
//! pair.

use std::path::{Path, PathBuf};

use crate::domain::entities::Environment;
use crate::domain::value_objects::ConfiguredParameters;
use crate::error::ProvisionResult;

/// Persistence of configured template parameters.
pub trait ParameterStore {
    /// Write the module's parameter file for `env` from the `source`
    /// template, substituting `${VAR}` references from the environment
    /// values (then the process environment). A missing source is not an
    /// error: the existing configured file, if any, is left alone.
    fn materialize(&self, env: &Environment, source: &Path, module: &str)
        -> ProvisionResult<()>;

    /// Read the configured parameter set. A missing file yields an empty set.
    fn read_configured(&self, env_name: &str, module: &str)
        -> ProvisionResult<ConfiguredParameters>;

    /// Replace the configured parameter set.
    fn write_configured(
        &self,
        env_name: &str,
        module: &str,
        parameters: &ConfiguredParameters,
    ) -> ProvisionResult<()>;

    /// Location of the configured parameter file handed to the provider.
    fn parameters_path(&self, env_name: &str, module: &str) -> PathBuf;
}
