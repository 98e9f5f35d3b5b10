//! Project layout value object - where provisioning files live on disk
//!
//! ```text
//! <root>/azure.yaml
//! <root>/<infra>/<module>.bicep
//! <root>/<infra>/<module>.parameters.json      (parameter template)
//! <root>/.azure/config.json                    (default environment)
//! <root>/.azure/<env>/.env                     (environment values)
//! <root>/.azure/<env>/<module>.parameters.json (configured parameters)
//! ```

use std::path::{Path, PathBuf};

pub const PROJECT_FILE: &str = "azure.yaml";
pub const STATE_DIR: &str = ".azure";
const ENV_FILE: &str = ".env";
const CONFIG_FILE: &str = "config.json";

/// Resolves provisioning paths relative to a project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    infra_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let infra_dir = root.join("infra");
        Self { root, infra_dir }
    }

    /// Override the template directory (relative paths resolve against the root)
    pub fn with_infra_dir(mut self, infra: impl AsRef<Path>) -> Self {
        self.infra_dir = self.root.join(infra);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project_file(&self) -> PathBuf {
        self.root.join(PROJECT_FILE)
    }

    pub fn module_path(&self, module: &str) -> PathBuf {
        self.infra_dir.join(format!("{}.bicep", module))
    }

    pub fn parameters_template_path(&self, module: &str) -> PathBuf {
        self.infra_dir.join(format!("{}.parameters.json", module))
    }

    pub fn state_dir(&self) -> PathBuf {
        self.root.join(STATE_DIR)
    }

    pub fn config_file(&self) -> PathBuf {
        self.state_dir().join(CONFIG_FILE)
    }

    pub fn environment_dir(&self, env_name: &str) -> PathBuf {
        self.state_dir().join(env_name)
    }

    pub fn environment_file(&self, env_name: &str) -> PathBuf {
        self.environment_dir(env_name).join(ENV_FILE)
    }

    pub fn parameters_path(&self, env_name: &str, module: &str) -> PathBuf {
        self.environment_dir(env_name)
            .join(format!("{}.parameters.json", module))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_paths() {
        let layout = ProjectLayout::new("/work/app");
        assert_eq!(layout.module_path("main"), PathBuf::from("/work/app/infra/main.bicep"));
        assert_eq!(
            layout.parameters_path("dev", "main"),
            PathBuf::from("/work/app/.azure/dev/main.parameters.json")
        );
        assert_eq!(layout.environment_file("dev"), PathBuf::from("/work/app/.azure/dev/.env"));
        assert_eq!(layout.config_file(), PathBuf::from("/work/app/.azure/config.json"));
    }

    #[test]
    fn infra_dir_override_is_root_relative() {
        let layout = ProjectLayout::new("/work/app").with_infra_dir("deploy/bicep");
        assert_eq!(
            layout.parameters_template_path("root"),
            PathBuf::from("/work/app/deploy/bicep/root.parameters.json")
        );
    }
}
