//! Error types for provisio
//!
//! Uses `thiserror` for library errors; the binary wraps these with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for provisio operations
pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// Main error type for provisioning operations
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Template could not be read or compiled
    #[error("loading template {path}: {message}")]
    TemplateLoad { path: PathBuf, message: String },

    /// A parameter without a default has no value and prompting is disabled
    #[error("missing required parameter '{name}'")]
    MissingParameter { name: String },

    /// No environment name was given and none could be selected
    #[error("no environment selected: pass --environment or run interactively")]
    MissingEnvironment,

    /// User input failed (closed stdin, no-prompt mode, terminal error)
    #[error("prompting for {0}")]
    Prompt(String),

    /// Configured parameter set could not be written
    #[error("saving deployment parameters: {0}")]
    ParameterPersist(String),

    /// Environment value file could not be written
    #[error("writing env file: {0}")]
    EnvironmentPersist(String),

    /// Project file missing or malformed
    #[error("loading project: {0}")]
    Project(String),

    /// Configuration file could not be parsed
    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Login probe failed
    #[error("failed to ensure login: {0}")]
    Login(String),

    /// Deployment target could not be constructed
    #[error("invalid deployment target: {0}")]
    InvalidTarget(String),

    /// Provider reported a failed deployment
    #[error("deployment failed: {0}")]
    Deployment(String),

    /// The deployment was cancelled before it completed
    #[error("deployment failed: deployment cancelled")]
    Cancelled,

    /// The error-path status fetch failed as well; both errors are kept
    #[error("deployment failed and the deployment result is unavailable: {deployment}; {fetch}")]
    DiagnosticFetch {
        deployment: Box<ProvisionError>,
        fetch: Box<ProvisionError>,
    },

    /// Structured output could not be written
    #[error("{context} could not be displayed: {message}")]
    OutputFormat { context: String, message: String },

    /// Generic provider failure (status queries, location listing, CLI errors)
    #[error("{0}")]
    Provider(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProvisionError {
    /// True for errors raised by a failed or cancelled deployment.
    pub fn is_deployment_failure(&self) -> bool {
        matches!(
            self,
            ProvisionError::Deployment(_)
                | ProvisionError::Cancelled
                | ProvisionError::DiagnosticFetch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_parameter() {
        let err = ProvisionError::MissingParameter {
            name: "location".to_string(),
        };
        assert_eq!(err.to_string(), "missing required parameter 'location'");
    }

    #[test]
    fn test_error_display_deployment_prefix() {
        let err = ProvisionError::Deployment("quota exceeded".to_string());
        assert_eq!(err.to_string(), "deployment failed: quota exceeded");
    }

    #[test]
    fn test_error_display_combines_both_failures() {
        let err = ProvisionError::DiagnosticFetch {
            deployment: Box::new(ProvisionError::Deployment("boom".to_string())),
            fetch: Box::new(ProvisionError::Provider("not found".to_string())),
        };
        let msg = err.to_string();
        assert!(msg.contains("deployment failed: boom"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn cancelled_counts_as_deployment_failure() {
        assert!(ProvisionError::Cancelled.is_deployment_failure());
        assert!(!ProvisionError::MissingEnvironment.is_deployment_failure());
    }
}
