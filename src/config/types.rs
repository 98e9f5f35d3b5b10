//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::provision::{DEFAULT_POLL_INTERVAL, DEFAULT_PORTAL_URL};
use crate::error::ProvisionResult;
use crate::infrastructure::azure::DEFAULT_AZ;

use super::loader::{self, ConfigWarning};

/// Project config location, relative to the project root
pub const PROJECT_CONFIG_FILE: &str = ".provisio/config.toml";

/// `[provision]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionConfig {
    /// Seconds between deployment progress reports
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Infra module name, overriding `infra.module` from azure.yaml
    #[serde(default)]
    pub module: Option<String>,

    /// Never prompt; fail when a value is missing
    #[serde(default)]
    pub no_prompt: bool,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            module: None,
            no_prompt: false,
        }
    }
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL.as_secs()
}

/// `[azure]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureConfig {
    /// Command used to invoke the Azure CLI; may carry leading arguments
    #[serde(default = "default_cli")]
    pub cli: String,

    /// Portal base URL used for the deployment link
    #[serde(default = "default_portal_url")]
    pub portal_url: String,
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self {
            cli: default_cli(),
            portal_url: default_portal_url(),
        }
    }
}

fn default_cli() -> String {
    DEFAULT_AZ.to_string()
}

fn default_portal_url() -> String {
    DEFAULT_PORTAL_URL.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub animation: AnimationMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Animation mode for the progress spinner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    #[default]
    Auto,
    Always,
    Never,
    /// Static status line without spinner frames
    Minimal,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub provision: ProvisionConfig,

    #[serde(default)]
    pub azure: AzureConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ProvisionResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ProvisionResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root).0
    }

    /// Same as [`Config::load_or_default`], keeping the warnings of the file that was used
    pub fn load_or_default_with_warnings(
        project_root: Option<&Path>,
    ) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (PROVISIO_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Interval between progress reports; never shorter than one second
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.provision.poll_interval_secs.max(1))
    }
}
