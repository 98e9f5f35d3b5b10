//! Provision Use Case
//!
//! Orchestrates the provisioning flow:
//! 1. Load the project and check login
//! 2. Select (or create) the environment
//! 3. Materialize and read the configured parameters, compile the template
//! 4. Resolve missing parameters and the deployment location
//! 5. Start the deployment and report progress until it completes
//! 6. Canonicalize and persist outputs, or emit failure diagnostics
//!
//! All prompting happens before the deployment starts; the environment is
//! only touched on the calling thread.

use std::sync::Arc;

use crate::domain::entities::{DeploymentResult, Environment, Template, LOCATION_KEY};
use crate::domain::ports::{
    format_value, DeploymentProvider, EnvironmentStore, Formatter, LoginChecker, NoneFormatter,
    NoopEventSink, NoopStatusLine, ParameterStore, ProgressSink, ProjectLoader, Prompter,
    ProvisionEvent, ProvisionEventSink, StatusLine, TemplateCompiler,
};
use crate::domain::services::{
    canonicalize_result, persist_outputs, persist_resolution, ParameterResolver,
};
use crate::domain::value_objects::{CancellationToken, DeploymentTarget};
use crate::error::{ProvisionError, ProvisionResult};

use super::driver::DeploymentDriver;
use super::options::ProvisionOptions;
use super::progress::ProgressReporter;
use super::result::ProvisionOutcome;

const PORTAL_DEPLOYMENT_BLADE: &str = "#blade/HubsExtension/DeploymentDetailsBlade/overview/id/";

/// Deep link to a deployment's live status page in the portal.
pub fn portal_deployment_link(portal_url: &str, resource_id: &str) -> String {
    let escaped: String = url::form_urlencoded::byte_serialize(resource_id.as_bytes()).collect();
    format!(
        "{}/{}{}",
        portal_url.trim_end_matches('/'),
        PORTAL_DEPLOYMENT_BLADE,
        escaped
    )
}

/// Provision use case - orchestrates `infra create`
///
/// Stores and the template compiler are generic; the provider is shared with
/// the deployment worker and so lives behind an `Arc`.
pub struct ProvisionUseCase<PS, ES, TC>
where
    PS: ParameterStore,
    ES: EnvironmentStore,
    TC: TemplateCompiler,
{
    parameter_store: PS,
    environment_store: ES,
    compiler: TC,
    provider: Arc<dyn DeploymentProvider>,
    prompter: Box<dyn Prompter>,
    login: Box<dyn LoginChecker>,
    project_loader: Box<dyn ProjectLoader>,
}

impl<PS, ES, TC> ProvisionUseCase<PS, ES, TC>
where
    PS: ParameterStore,
    ES: EnvironmentStore,
    TC: TemplateCompiler,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        parameter_store: PS,
        environment_store: ES,
        compiler: TC,
        provider: Arc<dyn DeploymentProvider>,
        prompter: Box<dyn Prompter>,
        login: Box<dyn LoginChecker>,
        project_loader: Box<dyn ProjectLoader>,
    ) -> Self {
        Self {
            parameter_store,
            environment_store,
            compiler,
            provider,
            prompter,
            login,
            project_loader,
        }
    }

    /// Execute silently: no structured output, no status line, no events.
    pub fn execute(&self, options: &ProvisionOptions) -> ProvisionResult<ProvisionOutcome> {
        self.execute_with_events(
            options,
            Arc::new(NoneFormatter),
            Arc::new(NoopStatusLine),
            Arc::new(NoopEventSink),
            &CancellationToken::new(),
        )
    }

    /// Execute the provision use case
    ///
    /// A structured `formatter` selects structured progress and failure
    /// diagnostics; any other kind reports progress through `status_line`.
    pub fn execute_with_events(
        &self,
        options: &ProvisionOptions,
        formatter: Arc<dyn Formatter>,
        status_line: Arc<dyn StatusLine>,
        events: Arc<dyn ProvisionEventSink>,
        cancel: &CancellationToken,
    ) -> ProvisionResult<ProvisionOutcome> {
        let project = self.project_loader.load(&options.layout)?;
        tracing::info!(project = %project.name, "loaded project");

        self.login.ensure_logged_in()?;

        let mut env = self.select_environment(options, events.as_ref())?;

        let layout = options.layout.clone().with_infra_dir(&project.infra.path);
        let module = options
            .module
            .clone()
            .unwrap_or_else(|| project.infra.module.clone());

        self.parameter_store.materialize(
            &env,
            &layout.parameters_template_path(&module),
            &module,
        )?;

        let template_path = layout.module_path(&module);
        let template = self.compiler.compile(&template_path)?;
        tracing::debug!(
            parameters = template.parameters.len(),
            outputs = template.outputs.len(),
            "compiled template"
        );

        let resolver = ParameterResolver::new(self.prompter.as_ref(), options.interactive);
        let existing = self.parameter_store.read_configured(env.name(), &module)?;
        let resolution = resolver.resolve(&template, existing, &mut env)?;
        let parameters_saved = persist_resolution(
            &resolution,
            &env,
            &module,
            &self.parameter_store,
            &self.environment_store,
        )?;
        if parameters_saved {
            events.on_event(ProvisionEvent::ParametersSaved {
                path: self.parameter_store.parameters_path(env.name(), &module),
            });
        }

        let location = self.resolve_location(&resolver, resolution.location, &mut env)?;
        let target = DeploymentTarget::new(env.subscription_id(), location, env.name())?;

        events.on_event(ProvisionEvent::DeploymentStarted {
            deployment_name: target.deployment_name().to_string(),
            location: target.location().to_string(),
            portal_link: portal_deployment_link(&options.portal_url, &target.resource_id()),
        });

        let sink = if formatter.kind().is_structured() {
            ProgressSink::Structured(formatter.clone())
        } else {
            ProgressSink::Interactive(status_line)
        };

        let outcome = self.deploy_and_wait(
            options,
            &target,
            template_path,
            self.parameter_store.parameters_path(env.name(), &module),
            &sink,
            cancel,
        );

        match outcome {
            Ok(mut deployment) => {
                if let Err(err) =
                    self.finish_success(&template, &mut deployment, &mut env, formatter.as_ref())
                {
                    events.on_event(ProvisionEvent::DeploymentFailed {
                        error: err.to_string(),
                    });
                    return Err(err);
                }
                events.on_event(ProvisionEvent::DeploymentSucceeded {
                    output_count: deployment.outputs().len(),
                });
                Ok(ProvisionOutcome {
                    environment_name: env.name().to_string(),
                    target,
                    deployment,
                    parameters_saved,
                })
            }
            Err(err) => {
                events.on_event(ProvisionEvent::DeploymentFailed {
                    error: err.to_string(),
                });
                Err(self.diagnose_failure(err, &target, formatter.as_ref()))
            }
        }
    }

    fn select_environment(
        &self,
        options: &ProvisionOptions,
        events: &dyn ProvisionEventSink,
    ) -> ProvisionResult<Environment> {
        let current_default = self.environment_store.default_environment()?;

        let name = match options.environment_name.clone().or(current_default.clone()) {
            Some(name) => name,
            None if options.interactive => self
                .prompter
                .ask_input("Please enter a new environment name:", None)
                .map_err(|e| ProvisionError::Prompt(format!("environment name: {}", e)))?
                .trim()
                .to_string(),
            None => return Err(ProvisionError::MissingEnvironment),
        };
        if name.is_empty() {
            return Err(ProvisionError::MissingEnvironment);
        }

        let created = !self.environment_store.exists(&name);
        let mut env = self.environment_store.load_or_init(&name)?;
        let mut changed = created;

        if env.subscription_id().is_empty() {
            let subscription_id = match options.subscription_id.clone() {
                Some(id) if !id.trim().is_empty() => id,
                _ if options.interactive => self
                    .prompter
                    .ask_input("Please enter your Azure subscription ID:", None)
                    .map_err(|e| ProvisionError::Prompt(format!("subscription: {}", e)))?,
                _ => {
                    return Err(ProvisionError::MissingParameter {
                        name: crate::domain::entities::SUBSCRIPTION_ID_KEY.to_string(),
                    })
                }
            };
            env.set_subscription_id(subscription_id.trim());
            changed = true;
        }

        if changed {
            self.environment_store.save(&env)?;
        }
        if current_default.as_deref() != Some(name.as_str()) {
            self.environment_store.set_default(&name)?;
        }

        tracing::info!(environment = %name, created, "environment ready");
        events.on_event(ProvisionEvent::EnvironmentReady { name, created });
        Ok(env)
    }

    fn resolve_location(
        &self,
        resolver: &ParameterResolver<'_>,
        resolved: Option<String>,
        env: &mut Environment,
    ) -> ProvisionResult<String> {
        let from_parameter = resolved.is_some();
        let subscription_id = env.subscription_id().to_string();
        let provider = self.provider.clone();

        let location = resolver.resolve_location(resolved, env, move || {
            provider
                .list_locations(&subscription_id)
                .map_err(|e| tracing::debug!(error = %e, "listing locations failed"))
                .unwrap_or_default()
        })?;

        if !from_parameter && env.location() != Some(location.as_str()) {
            env.set(LOCATION_KEY, location.clone());
            self.environment_store.save(env)?;
        }
        Ok(location)
    }

    fn deploy_and_wait(
        &self,
        options: &ProvisionOptions,
        target: &DeploymentTarget,
        template_path: std::path::PathBuf,
        parameters_path: std::path::PathBuf,
        sink: &ProgressSink,
        cancel: &CancellationToken,
    ) -> ProvisionResult<DeploymentResult> {
        let handle = DeploymentDriver::start(
            self.provider.clone(),
            target.clone(),
            template_path,
            parameters_path,
            cancel.clone(),
        );

        let reporter =
            ProgressReporter::new(options.poll_interval).with_suppressed(options.no_progress);
        let provider = self.provider.clone();
        reporter.run_until_complete(handle, sink, || {
            provider
                .get_deployment_resource_operations(
                    target.subscription_id(),
                    target.deployment_name(),
                )
                .map_err(|e| tracing::debug!(error = %e, "status query failed"))
                .ok()
        })
    }

    fn finish_success(
        &self,
        template: &Template,
        deployment: &mut DeploymentResult,
        env: &mut Environment,
        formatter: &dyn Formatter,
    ) -> ProvisionResult<()> {
        canonicalize_result(template, deployment);
        persist_outputs(deployment.outputs(), env, &self.environment_store)?;

        if formatter.kind().is_structured() {
            format_value(formatter, &*deployment).map_err(|e| ProvisionError::OutputFormat {
                context: "deployment result".to_string(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Structured mode fetches the deployment once so the caller sees its
    /// partial state next to the failure.
    fn diagnose_failure(
        &self,
        err: ProvisionError,
        target: &DeploymentTarget,
        formatter: &dyn Formatter,
    ) -> ProvisionError {
        if !formatter.kind().is_structured() {
            return err;
        }

        let partial = match self
            .provider
            .get_subscription_deployment(target.subscription_id(), target.deployment_name())
        {
            Ok(partial) => partial,
            Err(fetch) => {
                return ProvisionError::DiagnosticFetch {
                    deployment: Box::new(err),
                    fetch: Box::new(fetch),
                }
            }
        };

        match format_value(formatter, &partial) {
            Ok(()) => err,
            Err(fmt) => ProvisionError::OutputFormat {
                context: "deployment failed and the deployment result".to_string(),
                message: format!("{}; {}", fmt, err),
            },
        }
    }
}
