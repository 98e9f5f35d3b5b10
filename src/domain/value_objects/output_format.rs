//! Output format value object - how command results are rendered

use serde::{Deserialize, Serialize};

/// Output format selected with `--output`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Structured JSON on stdout
    Json,
    /// Tabular text
    Table,
    /// No structured output; interactive progress display
    #[default]
    None,
}

impl OutputFormat {
    /// Interactive display (spinner, portal link) is used only without a formatter.
    pub fn is_interactive(&self) -> bool {
        matches!(self, OutputFormat::None)
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Table => "table",
            OutputFormat::None => "none",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
