//! Dispatch from parsed arguments to command handlers.
//!
//! Resolves the runtime settings once, then drives the chosen command on a
//! single-threaded runtime. Every command talks to the SlideSpeak API, so
//! a missing API key fails here before any handler runs.

use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands;
use super::exit_status::ExitStatus;
use crate::config::Settings;

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let settings = Settings::resolve(args.api_key, args.base_url)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            match args.command {
                Some(Command::Generate(cmd)) => commands::generate(&settings, cmd).await,
                Some(Command::Templates) => commands::templates(&settings).await,
                Some(Command::Status(cmd)) => commands::status(&settings, cmd).await,
                Some(Command::Me) => commands::me(&settings).await,
                Some(Command::Upload(cmd)) => commands::upload(&settings, cmd).await,
                Some(Command::Serve) => {
                    // Serve command is handled in main.rs before calling run()
                    anyhow::bail!("Serve command should be handled before run()")
                }
                None => {
                    anyhow::bail!("No command provided. Use --help to see available commands.")
                }
            }
        })
}
