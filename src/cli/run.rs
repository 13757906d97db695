use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, parse::parse},
};
use crate::config::load_config;

/// Dispatch to the handler for the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` describing what was done, for the reporter
/// - `Err` if the command could not run (config, I/O)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;

    match command {
        Some(Command::Parse(args)) => {
            let loaded = load_config(&cwd)?;
            Ok(CommandResult::Parse(parse(args, &loaded.config)?))
        }
        Some(Command::Init) => Ok(CommandResult::Init(init(&cwd)?)),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
