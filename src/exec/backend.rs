// src/exec/backend.rs

//! Pluggable executor abstraction.
//!
//! `ProjectRunner` never spawns processes itself; it builds an
//! [`ExecRequest`] and awaits a `CommandExecutor`. That keeps the runner's
//! preconditions testable: a recording executor can prove that a failed
//! precondition spawned nothing.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use crate::errors::Result;
use crate::types::StreamMode;

/// One fully rendered command, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecRequest {
    /// Shell command line, passed verbatim to the shell.
    pub command: String,
    /// Working directory of the subprocess.
    pub cwd: PathBuf,
    pub streams: StreamMode,
}

/// Result of a successful (exit status 0) invocation.
///
/// `stdout`/`stderr` are only populated in [`StreamMode::Capture`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    pub status_code: Option<i32>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

pub type ExecFuture<'a> = Pin<Box<dyn Future<Output = Result<ExecOutput>> + Send + 'a>>;

/// Trait abstracting how rendered commands are executed.
///
/// Implementations must not return until the command has finished, and must
/// report spawn failures and non-zero exits as
/// [`ProjrunError::Subprocess`](crate::errors::ProjrunError::Subprocess).
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, request: ExecRequest) -> ExecFuture<'_>;
}
