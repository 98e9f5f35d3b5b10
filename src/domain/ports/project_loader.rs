//! Project Loader Port

use crate::domain::entities::Project;
use crate::domain::value_objects::ProjectLayout;
use crate::error::ProvisionResult;

/// Loads the project definition for a layout.
pub trait ProjectLoader {
    fn load(&self, layout: &ProjectLayout) -> ProvisionResult<Project>;
}
