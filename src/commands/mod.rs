//! Command handlers for the provisio binary

pub mod provision;

use anyhow::Result;
use provisio::presentation::Cli;

pub fn dispatch(cli: &Cli) -> Result<()> {
    provision::cmd_provision(cli, cli.command.create_args())
}
