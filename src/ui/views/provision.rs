//! Console rendering for `infra create`

use std::sync::Arc;

use crossterm::style::Stylize;
use provisio::domain::ports::{ProvisionEvent, ProvisionEventSink};
use provisio::infrastructure::TracingEventSink;
use provisio::ProvisionOutcome;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme;
use crate::ui::widgets::status_line::SpinnerStatusLine;

pub const CREATING_PREFIX: &str = "Creating Azure resources ";
pub const CREATED_MESSAGE: &str = "Created Azure resources";
pub const FAILED_MESSAGE: &str = "Failed creating Azure resources";

pub fn render_portal_notice(portal_link: &str, ui: &UiContext) -> String {
    let link = if ui.color {
        format!("{}", portal_link.with(theme::colors::INFO))
    } else {
        portal_link.to_string()
    };
    format!(
        "Provisioning Azure resources can take some time.\n\nYou can view detailed progress in the Azure Portal:\n{}\n",
        link
    )
}

pub fn render_outcome(outcome: &ProvisionOutcome, ui: &UiContext) -> String {
    let mut out = format!(
        "\n{} Provisioned environment '{}' in {}\n",
        Icon::Success.colored(ui.color, ui.unicode),
        outcome.environment_name,
        outcome.target.location()
    );
    let outputs = outcome.output_count();
    if outputs > 0 {
        out.push_str(&format!(
            "  {} {} output value{} saved to the environment\n",
            Icon::Link.colored(ui.color, ui.unicode),
            outputs,
            if outputs == 1 { "" } else { "s" }
        ));
    }
    out
}

/// Draws milestones on the terminal and keeps logging them.
pub struct ConsoleEventSink {
    status: Arc<SpinnerStatusLine>,
    ui: UiContext,
    log: TracingEventSink,
}

impl ConsoleEventSink {
    pub fn new(status: Arc<SpinnerStatusLine>, ui: UiContext) -> Self {
        Self {
            status,
            ui,
            log: TracingEventSink,
        }
    }
}

impl ProvisionEventSink for ConsoleEventSink {
    fn on_event(&self, event: ProvisionEvent) {
        match &event {
            ProvisionEvent::DeploymentStarted { portal_link, .. } => {
                eprintln!("{}", render_portal_notice(portal_link, &self.ui));
                self.status.start(CREATING_PREFIX);
            }
            ProvisionEvent::DeploymentSucceeded { .. } => self.status.succeed(CREATED_MESSAGE),
            ProvisionEvent::DeploymentFailed { .. } => self.status.fail(FAILED_MESSAGE),
            ProvisionEvent::EnvironmentReady { .. } | ProvisionEvent::ParametersSaved { .. } => {}
        }
        self.log.on_event(event);
    }
}
