//! Template Compiler Port

use std::path::Path;

use crate::domain::entities::Template;
use crate::error::ProvisionResult;

/// Compiles a template source file into its parameter/output metadata.
///
/// Fails with `ProvisionError::TemplateLoad` on malformed source.
pub trait TemplateCompiler {
    fn compile(&self, path: &Path) -> ProvisionResult<Template>;
}
