//! Domain Layer
//!
//! Core provisioning logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Environment, Template, DeploymentResult, Project
//! - `value_objects/` - DeploymentTarget, ConfiguredParameters, OutputFormat, ProjectLayout
//! - `services/` - Parameter resolution, output canonicalization, substitution
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
