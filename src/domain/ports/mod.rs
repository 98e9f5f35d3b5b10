//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deployment_provider;
pub mod environment_store;
pub mod formatter;
pub mod parameter_store;
pub mod progress_sink;
pub mod project_loader;
pub mod prompter;
pub mod provision_events;
pub mod template_compiler;

pub use deployment_provider::{AssumeLoggedIn, DeploymentProvider, LoginChecker};
pub use environment_store::EnvironmentStore;
pub use formatter::{format_value, Formatter, NoneFormatter};
pub use parameter_store::ParameterStore;
pub use progress_sink::{completion_status, NoopStatusLine, ProgressSink, StatusLine};
pub use project_loader::ProjectLoader;
pub use prompter::{NoPrompter, PromptError, Prompter};
pub use provision_events::{NoopEventSink, ProvisionEvent, ProvisionEventSink};
pub use template_compiler::TemplateCompiler;
