// src/exec/dry_run.rs

use tracing::info;

use super::backend::{CommandExecutor, ExecFuture, ExecOutput, ExecRequest};

/// Executor used for `--dry-run`: logs each request and reports success
/// without spawning anything.
#[derive(Debug, Clone, Default)]
pub struct DryRunExecutor;

impl CommandExecutor for DryRunExecutor {
    fn execute(&self, request: ExecRequest) -> ExecFuture<'_> {
        Box::pin(async move {
            info!(
                cmd = %request.command,
                cwd = %request.cwd.display(),
                "dry-run: command not executed"
            );
            Ok(ExecOutput {
                status_code: Some(0),
                ..ExecOutput::default()
            })
        })
    }
}
