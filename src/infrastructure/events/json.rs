//! JSON Formatter
//!
//! Writes each value as one line of NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::Formatter;
use crate::domain::value_objects::OutputFormat;
use crate::error::{ProvisionError, ProvisionResult};

/// Formatter that writes NDJSON to stdout
pub struct JsonFormatter {
    /// Mutex to keep lines from interleaving across threads
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonFormatter {
    /// Create a JSON formatter writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON formatter writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl Formatter for JsonFormatter {
    fn kind(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn format(&self, value: &serde_json::Value) -> ProvisionResult<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ProvisionError::OutputFormat {
                context: "output".to_string(),
                message: "output writer poisoned".to_string(),
            })?;
        writeln!(writer, "{}", value)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    /// Shared buffer so the test can read what the formatter wrote
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_compact_line_per_value() {
        let buf = SharedBuf::default();
        let formatter = JsonFormatter::with_writer(buf.clone());

        formatter.format(&json!({"name": "dev"})).unwrap();
        formatter
            .format(&json!({"operations": [], "timestamp": "t"}))
            .unwrap();

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        insta::assert_snapshot!(out, @r###"
        {"name":"dev"}
        {"operations":[],"timestamp":"t"}
        "###);
    }

    #[test]
    fn write_failures_surface_as_errors() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = JsonFormatter::with_writer(Closed)
            .format(&json!(1))
            .unwrap_err();
        assert!(matches!(err, ProvisionError::Io(_)));
    }
}
