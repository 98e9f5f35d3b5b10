//! Progress Sink Port
//!
//! Where deployment progress goes while the deployment runs. The variant is
//! picked once per run from the output format:
//! - `Interactive`: a one-line status such as "(3 of ~7 completed)" handed to a
//!   status line (spinner label)
//! - `Structured`: timestamped operation snapshots written through the
//!   output formatter

use std::sync::Arc;

use crate::domain::entities::{ProgressReport, ResourceOperation};
use crate::domain::ports::formatter::{format_value, Formatter};

/// Receives human-readable status updates
pub trait StatusLine: Send + Sync {
    fn update(&self, status: &str);
}

/// No-op status line for silent operation
pub struct NoopStatusLine;

impl StatusLine for NoopStatusLine {
    fn update(&self, _status: &str) {}
}

/// Progress rendering strategy
#[derive(Clone)]
pub enum ProgressSink {
    Interactive(Arc<dyn StatusLine>),
    Structured(Arc<dyn Formatter>),
}

impl ProgressSink {
    /// Render the outcome of one status query.
    ///
    /// `None` means the query failed; progress is best-effort, so nothing is
    /// shown. Structured mode also stays silent for an empty operation list.
    pub fn report(&self, operations: Option<Vec<ResourceOperation>>) {
        match self {
            ProgressSink::Interactive(line) => {
                if let Some(ops) = operations {
                    line.update(&completion_status(&ops));
                }
            }
            ProgressSink::Structured(formatter) => {
                let Some(ops) = operations.filter(|ops| !ops.is_empty()) else {
                    return;
                };
                if let Err(e) = format_value(formatter.as_ref(), &ProgressReport::now(ops)) {
                    tracing::debug!(error = %e, "dropping progress report");
                }
            }
        }
    }
}

/// "(k of ~n completed)" where k counts operations in the `Succeeded` state.
pub fn completion_status(operations: &[ResourceOperation]) -> String {
    let succeeded = operations.iter().filter(|op| op.succeeded()).count();
    format!("({} of ~{} completed)", succeeded, operations.len())
}
