//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{ProvisionOptions, ProvisionUseCase};
use crate::config::Config;
use crate::domain::entities::SUBSCRIPTION_ID_KEY;
use crate::domain::ports::{NoPrompter, Prompter};
use crate::domain::value_objects::ProjectLayout;
use crate::infrastructure::{
    AzCli, AzCliDeploymentProvider, AzLoginChecker, BicepCompiler, DialoguerPrompter,
    DotenvEnvironmentStore, JsonParameterStore, YamlProjectLoader,
};

/// Type alias for the concrete ProvisionUseCase with all dependencies
pub type ConcreteProvisionUseCase =
    ProvisionUseCase<JsonParameterStore, DotenvEnvironmentStore, BicepCompiler>;

/// Create a provision use case with all dependencies wired up
///
/// The Azure CLI command comes from `[azure] cli`. Without `interactive`,
/// every prompt fails, so missing values surface as errors.
pub fn create_provision_use_case(
    layout: &ProjectLayout,
    config: &Config,
    interactive: bool,
) -> ConcreteProvisionUseCase {
    let cli = AzCli::from_command_line(&config.azure.cli);
    let prompter: Box<dyn Prompter> = if interactive {
        Box::new(DialoguerPrompter::new())
    } else {
        Box::new(NoPrompter)
    };

    ProvisionUseCase::new(
        JsonParameterStore::new(layout.clone()),
        DotenvEnvironmentStore::new(layout.clone()),
        BicepCompiler::new(cli.clone()),
        Arc::new(AzCliDeploymentProvider::new(cli.clone())),
        prompter,
        Box::new(AzLoginChecker::new(cli)),
        Box::new(YamlProjectLoader::new()),
    )
}

/// Build provision options from config and command-line values.
///
/// CLI values win over config. The subscription falls back to the
/// `AZURE_SUBSCRIPTION_ID` environment variable.
pub fn create_provision_options(
    root: impl Into<PathBuf>,
    environment: Option<String>,
    interactive: bool,
    no_progress: bool,
    config: &Config,
) -> ProvisionOptions {
    provision_options_with(root, environment, interactive, no_progress, config, |key| {
        std::env::var(key).ok()
    })
}

fn provision_options_with<F>(
    root: impl Into<PathBuf>,
    environment: Option<String>,
    interactive: bool,
    no_progress: bool,
    config: &Config,
    lookup: F,
) -> ProvisionOptions
where
    F: Fn(&str) -> Option<String>,
{
    let mut options = ProvisionOptions::new(root)
        .with_interactive(interactive)
        .with_no_progress(no_progress)
        .with_poll_interval(config.poll_interval())
        .with_portal_url(config.azure.portal_url.clone());

    if let Some(name) = environment {
        options = options.with_environment(name);
    }
    if let Some(module) = &config.provision.module {
        options = options.with_module(module.clone());
    }
    if let Some(subscription) = lookup(SUBSCRIPTION_ID_KEY).filter(|s| !s.trim().is_empty()) {
        options = options.with_subscription_id(subscription);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn options_follow_config_and_flags() {
        let mut config = Config::default();
        config.provision.poll_interval_secs = 4;
        config.provision.module = Some("platform".to_string());
        config.azure.portal_url = "https://portal.azure.us".to_string();

        let options = provision_options_with(
            "/work/app",
            Some("dev".to_string()),
            false,
            true,
            &config,
            |key| (key == "AZURE_SUBSCRIPTION_ID").then(|| "sub-1".to_string()),
        );

        assert_eq!(options.environment_name.as_deref(), Some("dev"));
        assert_eq!(options.module.as_deref(), Some("platform"));
        assert_eq!(options.subscription_id.as_deref(), Some("sub-1"));
        assert_eq!(options.poll_interval, Duration::from_secs(4));
        assert_eq!(options.portal_url, "https://portal.azure.us");
        assert!(!options.interactive);
        assert!(options.no_progress);
    }

    #[test]
    fn blank_subscription_variable_is_ignored() {
        let options = provision_options_with(
            "/work/app",
            None,
            true,
            false,
            &Config::default(),
            |_| Some("  ".to_string()),
        );

        assert_eq!(options.subscription_id, None);
        assert_eq!(options.environment_name, None);
        assert_eq!(options.module, None);
    }

    #[test]
    fn factory_wires_use_case() {
        let layout = ProjectLayout::new("/work/app");
        let _use_case = create_provision_use_case(&layout, &Config::default(), false);
    }
}
