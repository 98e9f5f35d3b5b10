//! Output Rendering
//!
//! Maps the `--output` selection to a formatter. `infra create` accepts
//! `json` and `none`.

use std::sync::Arc;

use crate::domain::ports::{Formatter, NoneFormatter};
use crate::domain::value_objects::OutputFormat;
use crate::error::{ProvisionError, ProvisionResult};
use crate::infrastructure::JsonFormatter;

/// Output formats supported by `infra create`
pub const CREATE_OUTPUT_FORMATS: &[OutputFormat] = &[OutputFormat::Json, OutputFormat::None];

/// Create the formatter for `format`, rejecting formats the command does not support.
pub fn create_formatter(
    format: OutputFormat,
    supported: &[OutputFormat],
) -> ProvisionResult<Arc<dyn Formatter>> {
    if !supported.contains(&format) {
        let names: Vec<&str> = supported.iter().map(OutputFormat::as_str).collect();
        return Err(ProvisionError::OutputFormat {
            context: "output".to_string(),
            message: format!(
                "unsupported format '{}'; supported formats: {}",
                format,
                names.join(", ")
            ),
        });
    }

    Ok(match format {
        OutputFormat::Json => Arc::new(JsonFormatter::stdout()),
        OutputFormat::None | OutputFormat::Table => Arc::new(NoneFormatter),
    })
}
