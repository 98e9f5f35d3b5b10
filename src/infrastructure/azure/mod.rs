//! Azure CLI adapters
//!
//! - `cli` - Process runner for `az`
//! - `provider` - `DeploymentProvider` and `LoginChecker` over `az`
//! - `bicep` - `TemplateCompiler` over `az bicep build`

mod bicep;
mod cli;
mod provider;

pub use bicep::BicepCompiler;
pub use cli::{AzCli, DEFAULT_AZ};
pub use provider::{AzCliDeploymentProvider, AzLoginChecker};
