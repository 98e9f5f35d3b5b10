//! Project entity - the `azure.yaml` project definition

use serde::{Deserialize, Serialize};

fn default_infra_path() -> String {
    "infra".to_string()
}

fn default_module() -> String {
    "main".to_string()
}

/// Infrastructure section of the project file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraConfig {
    /// Directory holding templates, relative to the project root
    #[serde(default = "default_infra_path")]
    pub path: String,
    /// Root module name (`<module>.bicep`, `<module>.parameters.json`)
    #[serde(default = "default_module")]
    pub module: String,
}

impl Default for InfraConfig {
    fn default() -> Self {
        Self {
            path: default_infra_path(),
            module: default_module(),
        }
    }
}

/// A provisioning project
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub infra: InfraConfig,
}
