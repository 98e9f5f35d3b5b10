//! provisio CLI - provision Azure infrastructure for a project
//!
//! Usage: provisio [OPTIONS] <COMMAND>
//!
//! Commands:
//!   infra create  Create or update the Azure resources for the project
//!   provision     Same as `infra create`

mod commands;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use provisio::presentation::{logging, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let caps = ui::terminal::detect_capabilities();
    if let Err(e) = logging::init(cli.verbose, caps.supports_color) {
        eprintln!("warning: logging disabled: {}", e);
    }

    match commands::dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!(
                "{}",
                ui::error::format_error(&err, caps.supports_color, caps.supports_unicode)
            );
            ExitCode::FAILURE
        }
    }
}
