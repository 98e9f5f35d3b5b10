//! Terminal prompter
//!
//! Implements the Prompter port with `dialoguer`. Prompts render on stderr,
//! so structured stdout stays parseable.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use crate::domain::ports::{PromptError, Prompter};

/// Interactive prompter backed by `dialoguer`
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt_error(e: dialoguer::Error) -> PromptError {
    PromptError::new(e.to_string())
}

impl Prompter for DialoguerPrompter {
    fn ask_input(&self, message: &str, default: Option<&str>) -> Result<String, PromptError> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(message);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }

    fn ask_confirm(&self, message: &str, default: bool) -> Result<bool, PromptError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn ask_select(
        &self,
        message: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize, PromptError> {
        if items.is_empty() {
            return Err(PromptError::new(format!("nothing to choose from: {}", message)));
        }
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(items)
            .default(default.min(items.len() - 1))
            .interact()
            .map_err(prompt_error)
    }
}
