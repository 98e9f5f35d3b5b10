//! Prompt Service Port
//!
//! This trait defines how the orchestrator asks the user for input.
//! Implementations can be interactive (terminal prompts) or refuse outright
//! (`--no-prompt`, CI).

use thiserror::Error;

/// User input could not be obtained
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct PromptError(pub String);

impl PromptError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Trait for soliciting values from the user.
///
/// Implementations can be:
/// - `DialoguerPrompter`: Prompts on the terminal
/// - `NoPrompter`: Fails every prompt (non-interactive mode)
pub trait Prompter {
    /// Ask for a free-form value.
    fn ask_input(&self, message: &str, default: Option<&str>) -> Result<String, PromptError>;

    /// Ask a yes/no question.
    fn ask_confirm(&self, message: &str, default: bool) -> Result<bool, PromptError>;

    /// Ask the user to pick one of `items`; returns the chosen index.
    fn ask_select(&self, message: &str, items: &[String], default: usize)
        -> Result<usize, PromptError>;
}

/// Prompter used when prompting is disabled.
pub struct NoPrompter;

impl NoPrompter {
    fn refuse(message: &str) -> PromptError {
        PromptError(format!("cannot prompt in non-interactive mode: {}", message))
    }
}

impl Prompter for NoPrompter {
    fn ask_input(&self, message: &str, _default: Option<&str>) -> Result<String, PromptError> {
        Err(Self::refuse(message))
    }

    fn ask_confirm(&self, message: &str, _default: bool) -> Result<bool, PromptError> {
        Err(Self::refuse(message))
    }

    fn ask_select(
        &self,
        message: &str,
        _items: &[String],
        _default: usize,
    ) -> Result<usize, PromptError> {
        Err(Self::refuse(message))
    }
}
