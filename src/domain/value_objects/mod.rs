//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cancellation;
mod configured_parameters;
mod deployment_target;
mod output_format;
mod project_layout;

pub use cancellation::CancellationToken;
pub use configured_parameters::ConfiguredParameters;
pub use deployment_target::{subscription_deployment_rid, DeploymentTarget};
pub use output_format::OutputFormat;
pub use project_layout::{ProjectLayout, PROJECT_FILE, STATE_DIR};
