//! Repository Implementations
//!
//! File-backed implementations of the domain store ports.

mod environment;
mod parameters;
mod project;

pub use environment::DotenvEnvironmentStore;
pub use parameters::JsonParameterStore;
pub use project::YamlProjectLoader;
