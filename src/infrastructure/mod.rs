//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `azure/` - `az` CLI adapters (deployment provider, login probe, template compiler)
//! - `repositories/` - File-backed stores (parameters, environments, project file)
//! - `events/` - NDJSON formatter and logging event sink
//! - `fs/` - Atomic file writes
//! - `prompt` - Terminal prompter

pub mod azure;
pub mod events;
pub mod fs;
pub mod prompt;
pub mod repositories;

// Re-export for convenience
pub use azure::{AzCli, AzCliDeploymentProvider, AzLoginChecker, BicepCompiler};
pub use events::{JsonFormatter, TracingEventSink};
pub use prompt::DialoguerPrompter;
pub use repositories::{DotenvEnvironmentStore, JsonParameterStore, YamlProjectLoader};
