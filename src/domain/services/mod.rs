//! Domain Services
//!
//! Stateless business logic used by the provisioning use case.
//!
//! - `parameter_resolver` - Fill in missing template parameters, settle location
//! - `canonicalizer` - Normalize deployment outputs and merge them into the environment
//! - `substitution` - `${VAR}` expansion for parameter file templates

pub mod canonicalizer;
pub mod parameter_resolver;
pub mod substitution;

pub use canonicalizer::{canonicalize_outputs, canonicalize_result, persist_outputs};
pub use parameter_resolver::{
    persist_resolution, ParameterResolver, Resolution, LOCATION_PARAMETER,
};
pub use substitution::{substitute, SubstitutionError};
