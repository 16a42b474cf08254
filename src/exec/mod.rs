// src/exec/mod.rs

//! Process execution layer.
//!
//! Rendered commands are handed to a [`CommandExecutor`] together with the
//! directory to run in and how to wire the standard streams.
//!
//! - [`backend`] provides the `CommandExecutor` trait and the request/output
//!   types that cross it. Tests swap in a recording executor here.
//! - [`shell`] runs commands through the platform shell with
//!   `tokio::process::Command` (production).
//! - [`dry_run`] logs what would run and reports success (`--dry-run`).

pub mod backend;
pub mod dry_run;
pub mod shell;

pub use backend::{CommandExecutor, ExecFuture, ExecOutput, ExecRequest};
pub use dry_run::DryRunExecutor;
pub use shell::ShellExecutor;
