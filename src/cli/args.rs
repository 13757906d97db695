//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `parse`: Parse expressions and print the resulting trees
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Expressions to parse. Reads one per line from stdin when neither
    /// inputs nor --file are given.
    pub inputs: Vec<String>,

    /// Read expressions from a file, one per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output format (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print grammar rule entries to stderr
    #[arg(long)]
    pub trace: bool,

    /// Fail when input is left over after a valid expression
    #[arg(long)]
    pub deny_trailing: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse i18n expressions and print the parse trees
    Parse(ParseArgs),
    /// Initialize a new .i18nexprrc.json configuration file
    Init,
}
