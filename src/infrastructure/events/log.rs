//! Tracing Event Sink
//!
//! Records provisioning milestones as log events. Used when nothing is drawn
//! on the terminal (structured output).

use crate::domain::ports::{ProvisionEvent, ProvisionEventSink};

/// Event sink that logs each event through `tracing`
pub struct TracingEventSink;

impl ProvisionEventSink for TracingEventSink {
    fn on_event(&self, event: ProvisionEvent) {
        match event {
            ProvisionEvent::EnvironmentReady { name, created } => {
                tracing::info!(environment = %name, created, "environment ready");
            }
            ProvisionEvent::ParametersSaved { path } => {
                tracing::info!(path = %path.display(), "saved deployment parameters");
            }
            ProvisionEvent::DeploymentStarted {
                deployment_name,
                location,
                portal_link,
            } => {
                tracing::info!(
                    deployment = %deployment_name,
                    %location,
                    %portal_link,
                    "deployment started"
                );
            }
            ProvisionEvent::DeploymentSucceeded { output_count } => {
                tracing::info!(output_count, "deployment succeeded");
            }
            ProvisionEvent::DeploymentFailed { error } => {
                tracing::warn!(%error, "deployment failed");
            }
        }
    }
}
