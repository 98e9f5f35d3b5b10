//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ProvisionUseCase` - Orchestrates `infra create` (resolve parameters,
//!   deploy in the background, report progress, persist outputs)

pub mod provision;

pub use provision::{
    portal_deployment_link, DeploymentDriver, DeploymentHandle, ProgressReporter,
    ProvisionOptions, ProvisionOutcome, ProvisionUseCase,
};
