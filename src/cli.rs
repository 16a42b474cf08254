// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

use crate::project::Operation;

/// Command-line arguments for `projrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "projrun",
    version,
    about = "Clone, install, update and run commands across a set of projects.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `PROJRUN_CONFIG` or `Projrun.toml` in the current
    /// working directory is used.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Only act on these projects (repeatable). Defaults to all projects.
    #[arg(short, long = "project", global = true, value_name = "NAME")]
    pub projects: Vec<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PROJRUN_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Render and announce commands, but don't execute any of them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Clone each project into its working directory.
    Clone,

    /// Run the install command inside each project.
    Install,

    /// Clone, then install.
    Setup,

    /// Run the update command for a logical branch.
    Update {
        /// Branch key, looked up in each project's `branches` table.
        #[arg(short, long, default_value = "main")]
        branch: String,
    },

    /// Run an arbitrary command inside each project.
    Exec {
        /// Command tokens, joined with single spaces.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Print projects and their resolved templates without running anything.
    List,
}

impl Command {
    /// Lifecycle operations to perform per project, in order.
    ///
    /// `List` performs none.
    pub fn operations(&self) -> Vec<Operation> {
        match self {
            Command::Clone => vec![Operation::Clone],
            Command::Install => vec![Operation::Install],
            Command::Setup => vec![Operation::Clone, Operation::Install],
            Command::Update { branch } => vec![Operation::Update {
                branch: branch.clone(),
            }],
            Command::Exec { command } => vec![Operation::Exec {
                command: command.clone(),
            }],
            Command::List => Vec::new(),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
