//! provisio - Azure infrastructure provisioning
//!
//! provisio reads a project's infrastructure template, resolves its
//! parameters against a named environment, runs a subscription-scoped
//! deployment in the background while reporting progress, and records the
//! deployment outputs back into the environment.
//!
//! ## Architecture
//!
//! - `domain` - Entities, value objects, services and ports
//! - `application` - The `infra create` use case
//! - `infrastructure` - Azure CLI, file-backed stores, prompter, formatters
//! - `presentation` - CLI definition, dependency wiring, output selection

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ProvisionOptions, ProvisionOutcome, ProvisionUseCase};
pub use config::Config;
pub use domain::entities::{Environment, Project, Template};
pub use domain::value_objects::{CancellationToken, DeploymentTarget, OutputFormat};
pub use error::{ProvisionError, ProvisionResult};
