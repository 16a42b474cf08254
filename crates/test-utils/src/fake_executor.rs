use std::sync::{Arc, Mutex};

use projrun::errors::{ProjrunError, SubprocessFailure};
use projrun::exec::{CommandExecutor, ExecFuture, ExecOutput, ExecRequest};

/// A fake executor that:
/// - records every request it receives
/// - succeeds immediately, or fails with a fixed exit code for commands
///   containing a configured substring.
#[derive(Default)]
pub struct RecordingExecutor {
    executed: Arc<Mutex<Vec<ExecRequest>>>,
    fail_on: Option<(String, i32)>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every command containing `needle` exit with `code`.
    pub fn failing_on(mut self, needle: &str, code: i32) -> Self {
        self.fail_on = Some((needle.to_string(), code));
        self
    }

    pub fn requests(&self) -> Vec<ExecRequest> {
        self.executed.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.command).collect()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, request: ExecRequest) -> ExecFuture<'_> {
        Box::pin(async move {
            self.executed.lock().unwrap().push(request.clone());

            if let Some((needle, code)) = &self.fail_on {
                if request.command.contains(needle.as_str()) {
                    return Err(ProjrunError::Subprocess {
                        command: request.command,
                        failure: SubprocessFailure::Exit { code: Some(*code) },
                    });
                }
            }

            Ok(ExecOutput {
                status_code: Some(0),
                ..ExecOutput::default()
            })
        })
    }
}
