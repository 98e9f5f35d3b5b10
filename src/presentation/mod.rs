//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output format selection and logging setup
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `logging` - `tracing` subscriber setup
//! - `output` - Formatter selection for `--output`
//!
//! ## Usage
//!
//! ```ignore
//! use provisio::presentation::factory;
//!
//! let use_case = factory::create_provision_use_case(&layout, &config, true);
//! let outcome = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use cli::{Cli, Commands, CreateArgs, InfraCommands};
pub use factory::{create_provision_options, create_provision_use_case};
pub use output::{create_formatter, CREATE_OUTPUT_FORMATS};
