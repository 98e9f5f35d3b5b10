//! Domain Entities
//!
//! - `Environment` - Named deployment context with persisted values
//! - `Template` - Compiled template (declared parameters and outputs)
//! - `DeploymentResult` / `ResourceOperation` - Provider results
//! - `Project` - Parsed project file

mod deployment;
mod environment;
mod project;
mod template;

pub use deployment::{
    DeploymentOutput, DeploymentProperties, DeploymentResult, Location, ProgressReport,
    ResourceOperation, ResourceOperationProperties, TargetResource, SUCCEEDED,
};
pub use environment::{Environment, ENV_NAME_KEY, LOCATION_KEY, SUBSCRIPTION_ID_KEY};
pub use project::{InfraConfig, Project};
pub use template::{Template, TemplateOutput, TemplateParameter};
