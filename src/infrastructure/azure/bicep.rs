//! Template compiler
//!
//! `.json` templates are already compiled ARM documents and are read as-is;
//! anything else goes through `az bicep build --stdout`.

use std::path::Path;

use crate::domain::entities::Template;
use crate::domain::ports::TemplateCompiler;
use crate::error::{ProvisionError, ProvisionResult};

use super::cli::AzCli;

/// Compiles bicep modules through the Azure CLI
#[derive(Debug, Clone, Default)]
pub struct BicepCompiler {
    cli: AzCli,
}

impl BicepCompiler {
    pub fn new(cli: AzCli) -> Self {
        Self { cli }
    }
}

impl TemplateCompiler for BicepCompiler {
    fn compile(&self, path: &Path) -> ProvisionResult<Template> {
        let load_error = |message: String| ProvisionError::TemplateLoad {
            path: path.to_path_buf(),
            message,
        };

        if !path.is_file() {
            return Err(load_error("file not found".to_string()));
        }

        let compiled = if path.extension().is_some_and(|ext| ext == "json") {
            std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?
        } else {
            let file = path.to_string_lossy();
            self.cli
                .run(&["bicep", "build", "--file", &*file, "--stdout"])
                .map_err(|e| load_error(e.to_string()))?
        };

        Template::from_json(&compiled).map_err(|e| load_error(e.to_string()))
    }
}
