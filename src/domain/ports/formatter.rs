//! Output Formatter Port
//!
//! Structured output channel for results, partial deployment status and
//! progress reports.

use serde::Serialize;

use crate::domain::value_objects::OutputFormat;
use crate::error::{ProvisionError, ProvisionResult};

/// Renders values to the command's output stream.
pub trait Formatter: Send + Sync {
    /// Which format this formatter produces
    fn kind(&self) -> OutputFormat;

    /// Write one value.
    fn format(&self, value: &serde_json::Value) -> ProvisionResult<()>;
}

/// Serialize `value` and hand it to the formatter.
pub fn format_value<T: Serialize + ?Sized>(
    formatter: &dyn Formatter,
    value: &T,
) -> ProvisionResult<()> {
    let json = serde_json::to_value(value).map_err(|e| ProvisionError::OutputFormat {
        context: "output".to_string(),
        message: e.to_string(),
    })?;
    formatter.format(&json)
}

/// Formatter for `--output none`: writes nothing.
pub struct NoneFormatter;

impl Formatter for NoneFormatter {
    fn kind(&self) -> OutputFormat {
        OutputFormat::None
    }

    fn format(&self, _value: &serde_json::Value) -> ProvisionResult<()> {
        Ok(())
    }
}
