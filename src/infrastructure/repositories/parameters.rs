//! JSON Parameter Store
//!
//! Implements the ParameterStore port with ARM parameter documents kept at
//! `.azure/<env>/<module>.parameters.json`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::Environment;
use crate::domain::ports::ParameterStore;
use crate::domain::services::substitute;
use crate::domain::value_objects::{ConfiguredParameters, ProjectLayout};
use crate::error::{ProvisionError, ProvisionResult};
use crate::infrastructure::fs::atomic_write;

/// File-backed parameter store rooted at a project layout
#[derive(Debug, Clone)]
pub struct JsonParameterStore {
    layout: ProjectLayout,
}

impl JsonParameterStore {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }
}

impl ParameterStore for JsonParameterStore {
    /// Values from the template document win over previously configured
    /// ones; configured values the template does not mention are kept so a
    /// later run does not ask for them again.
    fn materialize(&self, env: &Environment, source: &Path, module: &str) -> ProvisionResult<()> {
        let raw = match fs::read_to_string(source) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(source = %source.display(), "no parameter template, skipping");
                return Ok(());
            }
            Err(e) => {
                return Err(ProvisionError::TemplateLoad {
                    path: source.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        let expanded = substitute(&raw, |name| {
            env.get(name)
                .map(str::to_string)
                .or_else(|| std::env::var(name).ok())
        })
        .map_err(|e| ProvisionError::TemplateLoad {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;

        let from_template =
            ConfiguredParameters::from_document(&expanded).map_err(|e| {
                ProvisionError::TemplateLoad {
                    path: source.to_path_buf(),
                    message: e.to_string(),
                }
            })?;

        let mut merged = self.read_configured(env.name(), module)?;
        for (name, value) in from_template.iter() {
            merged.insert(name.clone(), value.clone());
        }

        self.write_configured(env.name(), module, &merged)
    }

    fn read_configured(
        &self,
        env_name: &str,
        module: &str,
    ) -> ProvisionResult<ConfiguredParameters> {
        let path = self.parameters_path(env_name, module);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(ConfiguredParameters::from_document(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfiguredParameters::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_configured(
        &self,
        env_name: &str,
        module: &str,
        parameters: &ConfiguredParameters,
    ) -> ProvisionResult<()> {
        let path = self.parameters_path(env_name, module);
        let document = parameters
            .to_document()
            .map_err(|e| persist_error(&path, e))?;
        atomic_write(&path, document.as_bytes()).map_err(|e| persist_error(&path, e))?;

        tracing::debug!(path = %path.display(), count = parameters.len(), "wrote parameters");
        Ok(())
    }

    fn parameters_path(&self, env_name: &str, module: &str) -> PathBuf {
        self.layout.parameters_path(env_name, module)
    }
}

fn persist_error(path: &Path, e: impl std::fmt::Display) -> ProvisionError {
    ProvisionError::ParameterPersist(format!("{}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    const TEMPLATE: &str = r#"{
  "$schema": "https://schema.management.azure.com/schemas/2019-04-01/deploymentParameters.json#",
  "contentVersion": "1.0.0.0",
  "parameters": {
    "environmentName": { "value": "${AZURE_ENV_NAME}" },
    "location": { "value": "${AZURE_LOCATION}" }
  }
}"#;

    fn store(root: &Path) -> JsonParameterStore {
        JsonParameterStore::new(ProjectLayout::new(root))
    }

    #[test]
    fn missing_configured_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let params = store(dir.path()).read_configured("dev", "main").unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn write_then_read_preserves_values() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());
        let params: ConfiguredParameters =
            [("location", json!("eastus")), ("replicas", json!(3))].into_iter().collect();

        store.write_configured("dev", "main", &params).unwrap();

        assert!(dir.path().join(".azure/dev/main.parameters.json").exists());
        assert_eq!(store.read_configured("dev", "main").unwrap(), params);
    }

    #[test]
    fn materialize_substitutes_environment_values() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("infra/main.parameters.json");
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        fs::write(&source, TEMPLATE).unwrap();

        let mut env = Environment::new("dev");
        env.set("AZURE_LOCATION", "westus3");

        let store = store(dir.path());
        store.materialize(&env, &source, "main").unwrap();

        let params = store.read_configured("dev", "main").unwrap();
        assert_eq!(params.get("environmentName"), Some(&json!("dev")));
        assert_eq!(params.get("location"), Some(&json!("westus3")));
    }

    #[test]
    fn materialize_keeps_previously_entered_values() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("infra/main.parameters.json");
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        fs::write(&source, TEMPLATE).unwrap();

        let store = store(dir.path());
        let earlier: ConfiguredParameters =
            [("principalId", json!("user-1"))].into_iter().collect();
        store.write_configured("dev", "main", &earlier).unwrap();

        store
            .materialize(&Environment::new("dev"), &source, "main")
            .unwrap();

        let params = store.read_configured("dev", "main").unwrap();
        assert_eq!(params.get("principalId"), Some(&json!("user-1")));
        assert!(params.contains("environmentName"));
    }

    #[test]
    fn materialize_without_template_is_a_no_op() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());
        store
            .materialize(
                &Environment::new("dev"),
                &dir.path().join("infra/main.parameters.json"),
                "main",
            )
            .unwrap();
        assert!(!dir.path().join(".azure").exists());
    }

    #[test]
    fn malformed_template_reports_its_path() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("main.parameters.json");
        fs::write(&source, "{ \"parameters\": ${OOPS").unwrap();

        let err = store(dir.path())
            .materialize(&Environment::new("dev"), &source, "main")
            .unwrap_err();
        assert!(matches!(err, ProvisionError::TemplateLoad { ref path, .. } if path == &source));
    }
}
