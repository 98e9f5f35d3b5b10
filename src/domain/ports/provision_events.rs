//! Provision Event Port
//!
//! Observable milestones of a provisioning run. The interactive console uses
//! them to print the portal link and drive the spinner; other sinks may log
//! or ignore them.

use std::path::PathBuf;

/// Event emitted during provisioning
#[derive(Debug, Clone, PartialEq)]
pub enum ProvisionEvent {
    /// Environment selected (and created if it did not exist)
    EnvironmentReady { name: String, created: bool },

    /// Newly entered parameter values were written
    ParametersSaved { path: PathBuf },

    /// Deployment submitted; `portal_link` points at its live status page
    DeploymentStarted {
        deployment_name: String,
        location: String,
        portal_link: String,
    },

    /// Deployment finished and outputs were saved
    DeploymentSucceeded { output_count: usize },

    /// Deployment failed or was cancelled
    DeploymentFailed { error: String },
}

/// Receives provisioning events
pub trait ProvisionEventSink: Send + Sync {
    fn on_event(&self, event: ProvisionEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ProvisionEventSink for NoopEventSink {
    fn on_event(&self, _event: ProvisionEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingEventSink {
        events: Arc<Mutex<Vec<ProvisionEvent>>>,
    }

    impl ProvisionEventSink for RecordingEventSink {
        fn on_event(&self, event: ProvisionEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events_in_order() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingEventSink {
            events: events.clone(),
        };

        sink.on_event(ProvisionEvent::EnvironmentReady {
            name: "dev".to_string(),
            created: true,
        });
        sink.on_event(ProvisionEvent::DeploymentSucceeded { output_count: 2 });

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[1],
            ProvisionEvent::DeploymentSucceeded { output_count: 2 }
        ));
    }

    #[test]
    fn noop_sink_accepts_everything() {
        NoopEventSink.on_event(ProvisionEvent::DeploymentFailed {
            error: "boom".to_string(),
        });
    }
}
