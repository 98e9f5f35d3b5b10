//! Output and event sinks
//!
//! - `json` - NDJSON formatter for `--output json`
//! - `log` - Event sink that records provisioning milestones through `tracing`

mod json;
mod log;

pub use json::JsonFormatter;
pub use log::TracingEventSink;
