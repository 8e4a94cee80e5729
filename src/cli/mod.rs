//! Command line interface.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: one handler per subcommand
//! - `exit_status`: process exit conventions
//! - `report`: output formatting
//! - `run`: dispatch from parsed arguments to command handlers

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
