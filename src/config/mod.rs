//! Configuration module for provisio
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PROVISIO_*)
//! 3. Project config (.provisio/config.toml)
//! 4. User config (~/.config/provisio/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    AnimationMode, AzureConfig, ColorMode, Config, OutputConfig, ProvisionConfig,
    PROJECT_CONFIG_FILE,
};
