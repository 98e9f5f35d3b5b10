//! Provision Options
//!
//! Configuration types for provision operations.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::value_objects::ProjectLayout;

use super::progress::DEFAULT_POLL_INTERVAL;

/// Default portal base used for deployment deep links
pub const DEFAULT_PORTAL_URL: &str = "https://portal.azure.com";

/// Options for the provision use case
#[derive(Debug, Clone)]
pub struct ProvisionOptions {
    /// Project root and template locations
    pub layout: ProjectLayout,
    /// Explicit environment name (`-e/--environment`)
    pub environment_name: Option<String>,
    /// Subscription to use when the environment has none recorded
    pub subscription_id: Option<String>,
    /// Template module override (defaults to the project's `infra.module`)
    pub module: Option<String>,
    /// Whether the user may be prompted
    pub interactive: bool,
    /// Skip status queries while waiting (`--no-progress`)
    pub no_progress: bool,
    /// Time between status queries
    pub poll_interval: Duration,
    /// Portal base URL for the deployment deep link
    pub portal_url: String,
}

impl ProvisionOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            layout: ProjectLayout::new(root),
            environment_name: None,
            subscription_id: None,
            module: None,
            interactive: false,
            no_progress: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
            portal_url: DEFAULT_PORTAL_URL.to_string(),
        }
    }

    pub fn with_environment(mut self, name: impl Into<String>) -> Self {
        self.environment_name = Some(name.into());
        self
    }

    pub fn with_subscription_id(mut self, subscription_id: impl Into<String>) -> Self {
        self.subscription_id = Some(subscription_id.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_no_progress(mut self, no_progress: bool) -> Self {
        self.no_progress = no_progress;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_portal_url(mut self, url: impl Into<String>) -> Self {
        self.portal_url = url.into();
        self
    }
}
