//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--output, --no-prompt, --environment, --cwd, --color, --verbose)
//!   are inherited by all subcommands
//! - `provision` is a top-level alias for `infra create`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ColorMode;
use crate::domain::value_objects::OutputFormat;

/// provisio - provision Azure infrastructure for a project
#[derive(Parser, Debug)]
#[command(name = "provisio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (json is written to stdout, one document per line)
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::None)]
    pub output: OutputFormat,

    /// Never prompt; fail when a value is missing
    #[arg(long, global = true)]
    pub no_prompt: bool,

    /// Environment to use (defaults to the project's default environment)
    #[arg(short, long, global = true, value_name = "NAME")]
    pub environment: Option<String>,

    /// Project directory (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage Azure infrastructure
    Infra {
        #[command(subcommand)]
        command: InfraCommands,
    },

    /// Provision the Azure resources for the project (same as `infra create`)
    Provision(CreateArgs),
}

#[derive(Subcommand, Debug)]
pub enum InfraCommands {
    /// Create or update the Azure resources for the project
    Create(CreateArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CreateArgs {
    /// Do not query deployment progress while waiting
    #[arg(long)]
    pub no_progress: bool,
}

impl Commands {
    /// Arguments of `infra create`, whichever spelling was used
    pub fn create_args(&self) -> &CreateArgs {
        match self {
            Commands::Infra {
                command: InfraCommands::Create(args),
            }
            | Commands::Provision(args) => args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_infra_create() {
        let cli = Cli::try_parse_from(["provisio", "infra", "create"]).unwrap();
        assert!(!cli.command.create_args().no_progress);
        assert_eq!(cli.output, OutputFormat::None);
        assert!(!cli.no_prompt);
    }

    #[test]
    fn test_cli_parse_provision_alias() {
        let cli = Cli::try_parse_from(["provisio", "provision", "--no-progress"]).unwrap();
        assert!(matches!(cli.command, Commands::Provision(_)));
        assert!(cli.command.create_args().no_progress);
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "provisio",
            "infra",
            "create",
            "--output",
            "json",
            "-e",
            "dev",
            "--no-prompt",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.environment.as_deref(), Some("dev"));
        assert!(cli.no_prompt);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_parse_cwd_and_color() {
        let cli = Cli::try_parse_from([
            "provisio",
            "--cwd",
            "/work/app",
            "--color",
            "never",
            "provision",
        ])
        .unwrap();

        assert_eq!(cli.cwd, Some(PathBuf::from("/work/app")));
        assert_eq!(cli.color, Some(ColorMode::Never));
    }

    #[test]
    fn test_cli_rejects_unknown_output() {
        let result = Cli::try_parse_from(["provisio", "provision", "--output", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["provisio"]).is_err());
        assert!(Cli::try_parse_from(["provisio", "infra"]).is_err());
    }
}
