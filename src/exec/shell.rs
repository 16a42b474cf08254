// src/exec/shell.rs

//! Real executor: runs commands through the platform shell.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use super::backend::{CommandExecutor, ExecFuture, ExecOutput, ExecRequest};
use crate::errors::{ProjrunError, Result, SubprocessFailure};
use crate::types::StreamMode;

/// Production executor.
///
/// The command string goes to `sh -c` (or `cmd /C` on Windows) unmodified,
/// so pipes, `&&` and quoting in templates behave as they would when typed.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor;

impl ShellExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&self, request: ExecRequest) -> ExecFuture<'_> {
        Box::pin(run_shell(request))
    }
}

/// Build a shell command appropriate for the platform.
fn shell_command(command: &str, cwd: &Path) -> Command {
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    };
    cmd.current_dir(cwd);
    cmd
}

async fn run_shell(request: ExecRequest) -> Result<ExecOutput> {
    debug!(
        cmd = %request.command,
        cwd = %request.cwd.display(),
        streams = ?request.streams,
        "starting subprocess"
    );

    let mut cmd = shell_command(&request.command, &request.cwd);

    let output = match request.streams {
        StreamMode::Inherit => {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());

            let status = cmd
                .status()
                .await
                .map_err(|e| spawn_failure(&request.command, e))?;

            ExecOutput {
                status_code: status.code(),
                stdout: None,
                stderr: None,
            }
        }
        StreamMode::Capture => {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped());

            let out = cmd
                .output()
                .await
                .map_err(|e| spawn_failure(&request.command, e))?;

            ExecOutput {
                status_code: out.status.code(),
                stdout: Some(String::from_utf8_lossy(&out.stdout).into_owned()),
                stderr: Some(String::from_utf8_lossy(&out.stderr).into_owned()),
            }
        }
    };

    info!(
        cmd = %request.command,
        exit_code = ?output.status_code,
        success = output.status_code == Some(0),
        "subprocess exited"
    );

    if output.status_code != Some(0) {
        return Err(ProjrunError::Subprocess {
            command: request.command,
            failure: SubprocessFailure::Exit {
                code: output.status_code,
            },
        });
    }

    Ok(output)
}

fn spawn_failure(command: &str, err: std::io::Error) -> ProjrunError {
    ProjrunError::Subprocess {
        command: command.to_string(),
        failure: SubprocessFailure::Spawn(err),
    }
}
