//! YAML Project Loader
//!
//! Implements the ProjectLoader port by parsing `azure.yaml`.

use std::fs;

use crate::domain::entities::Project;
use crate::domain::ports::ProjectLoader;
use crate::domain::value_objects::ProjectLayout;
use crate::error::{ProvisionError, ProvisionResult};

/// Reads the project file at the layout root
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlProjectLoader;

impl YamlProjectLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectLoader for YamlProjectLoader {
    fn load(&self, layout: &ProjectLayout) -> ProvisionResult<Project> {
        let path = layout.project_file();
        let raw = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProvisionError::Project(format!(
                    "no project exists; to create a new project, add {}",
                    path.display()
                ))
            } else {
                ProvisionError::Project(format!("{}: {}", path.display(), e))
            }
        })?;

        let project: Project = serde_yaml_ng::from_str(&raw)
            .map_err(|e| ProvisionError::Project(format!("{}: {}", path.display(), e)))?;
        if project.name.trim().is_empty() {
            return Err(ProvisionError::Project(format!(
                "{}: 'name' must not be empty",
                path.display()
            )));
        }
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_project_with_infra_overrides() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("azure.yaml"),
            "name: todo\ninfra:\n  path: deploy\n",
        )
        .unwrap();

        let project = YamlProjectLoader::new()
            .load(&ProjectLayout::new(dir.path()))
            .unwrap();
        assert_eq!(project.name, "todo");
        assert_eq!(project.infra.path, "deploy");
        assert_eq!(project.infra.module, "main");
    }

    #[test]
    fn missing_project_file_is_a_project_error() {
        let dir = tempdir().unwrap();
        let err = YamlProjectLoader::new()
            .load(&ProjectLayout::new(dir.path()))
            .unwrap_err();
        assert!(err.to_string().starts_with("loading project: no project exists"));
    }

    #[test]
    fn unnamed_project_is_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("azure.yaml"), "name: ''\n").unwrap();
        let err = YamlProjectLoader::new()
            .load(&ProjectLayout::new(dir.path()))
            .unwrap_err();
        assert!(matches!(err, ProvisionError::Project(_)));
    }
}
