//! Provision Module
//!
//! Orchestrates `infra create`: parameter resolution, the background
//! deployment and progress reporting.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`ProvisionOptions`)
//! - `result` - Result types (`ProvisionOutcome`)
//! - `driver` - Background deployment worker (`DeploymentDriver`, `DeploymentHandle`)
//! - `progress` - Poll loop while the deployment runs (`ProgressReporter`)
//! - `use_case` - Core use case logic (`ProvisionUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use provisio::application::provision::{ProvisionOptions, ProvisionUseCase};
//!
//! let use_case = ProvisionUseCase::new(params, envs, compiler, provider, prompter, login, loader);
//! let outcome = use_case.execute(&ProvisionOptions::new(".").with_environment("dev"))?;
//! ```

pub mod driver;
mod options;
pub mod progress;
mod result;
mod use_case;

pub use driver::{DeploymentDriver, DeploymentHandle};
pub use options::{ProvisionOptions, DEFAULT_PORTAL_URL};
pub use progress::{ProgressReporter, DEFAULT_POLL_INTERVAL};
pub use result::ProvisionOutcome;
pub use use_case::{portal_deployment_link, ProvisionUseCase};
