use crate::command::{COMMAND_NOT_FOUND, Executor, ExitCode, GENERAL_FAILURE, Invocation};
use crate::error::ExecError;
use std::io::Write;
use tracing::debug;

/// Runs parsed commands through an [`Executor`] and reports failures as text.
///
/// `execute` never fails: a missing program prints
/// `"<command>: command not found"` on `stdout`, shell-side failures print to
/// `stderr`, and the caller gets an exit status either way.
pub struct Dispatcher {
    executor: Box<dyn Executor>,
}

impl Dispatcher {
    pub fn new(executor: Box<dyn Executor>) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &dyn Executor {
        self.executor.as_ref()
    }

    /// Runs `invocation` to completion and returns its exit status.
    pub fn execute(
        &self,
        invocation: &Invocation,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> ExitCode {
        // The child writes to the same terminal; our own output goes first.
        let _ = stdout.flush();
        let _ = stderr.flush();

        match self.executor.spawn_and_wait(invocation) {
            Ok(code) => {
                debug!(command = %invocation.command, code, "command finished");
                code
            }
            Err(e @ ExecError::NotFound { .. }) => {
                let _ = writeln!(stdout, "{}", e);
                COMMAND_NOT_FOUND
            }
            Err(ExecError::Fork(_)) => {
                let _ = writeln!(stderr, "Error: fork failed");
                GENERAL_FAILURE
            }
            Err(e) => {
                let _ = writeln!(stderr, "Error: {}", e);
                GENERAL_FAILURE
            }
        }
    }
}
