//! Progress Reporter
//!
//! Waits for a running deployment and, on every poll interval that elapses
//! first, asks for the current operations and hands them to the sink.

use std::time::Duration;

use crate::domain::entities::{DeploymentResult, ResourceOperation};
use crate::domain::ports::ProgressSink;
use crate::error::ProvisionResult;

use super::driver::DeploymentHandle;

/// Default time between status queries
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Polls deployment status until the deployment completes.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    interval: Duration,
    suppress: bool,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl ProgressReporter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            suppress: false,
        }
    }

    /// Skip status queries entirely (`--no-progress`).
    pub fn with_suppressed(mut self, suppress: bool) -> Self {
        self.suppress = suppress;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Block until the deployment finishes, reporting on each tick.
    ///
    /// `query` returns `None` when the status lookup failed; that never ends
    /// the wait. At most one query runs at a time and the interval restarts
    /// only after the sink is done with it.
    pub fn run_until_complete<Q>(
        &self,
        mut handle: DeploymentHandle,
        sink: &ProgressSink,
        query: Q,
    ) -> ProvisionResult<DeploymentResult>
    where
        Q: Fn() -> Option<Vec<ResourceOperation>>,
    {
        let mut ticks = 0usize;
        loop {
            if let Some(result) = handle.wait_timeout(self.interval) {
                tracing::debug!(ticks, ok = result.is_ok(), "deployment finished");
                return result;
            }

            ticks += 1;
            if self.suppress {
                continue;
            }
            sink.report(query());
        }
    }
}
