//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Compare a baseline table against target tables
//! - `clean`: Find and remove table entries no source file references
//! - `init`: Initialize lct configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Clean(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Configuration file (default: nearest .lctrc.json)
    #[arg(long, env = "LCT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Treat keys present only in a target as errors (overrides config file)
    #[arg(long)]
    pub fail_on_extra: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Baseline table (overrides config file)
    pub baseline: Option<PathBuf>,
    /// Target tables to compare against the baseline (overrides config file)
    pub targets: Vec<PathBuf>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct CleanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// File extension to scan, without the dot (repeatable; overrides config file)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Directory name to skip (repeatable; overrides config file)
    #[arg(long = "exclude-dir", value_name = "DIR")]
    pub exclude_dirs: Vec<String>,

    /// Actually delete keys (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Skip the confirmation prompt of --apply
    #[arg(short, long, requires = "apply")]
    pub yes: bool,

    /// Write a plain-text cleanup report to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    /// Table to clean (default: baseline from config file)
    pub table: Option<PathBuf>,
    #[command(flatten)]
    pub args: CleanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report keys missing from (or extra in) target tables
    Check(CheckCommand),
    /// Remove table entries that no source file references
    Clean(CleanCommand),
    /// Initialize a new .lctrc.json configuration file
    Init,
}
