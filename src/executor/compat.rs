//! Execution through the Linux compatibility subsystem (WSL).
//!
//! Each command is handed to the subsystem's `sh` as a single `-c` string:
//! `wsl.exe sh -c "<command> <arg1> <arg2> ..."`. Double quotes inside
//! arguments are escaped so they cannot close that string early. Nothing else
//! is escaped, so an argument containing a space reaches `sh` as two words.

use crate::command::{BackendKind, Executor, ExitCode, GENERAL_FAILURE, Invocation};
use crate::error::ExecError;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, warn};

/// Executable that fronts the compatibility subsystem.
pub const DEFAULT_COMPAT_PROGRAM: &str = "wsl.exe";

/// Argument that makes the subsystem report whether it is installed.
pub const STATUS_ARG: &str = "--status";

/// Text printed when the availability probe fails.
pub const INSTALL_HINT: &str = "ERROR: WSL is not installed or not available.\n\
     Please install WSL by running: wsl --install\n\
     (Run this in PowerShell as Administrator)";

/// Hides the console window of the probe process.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Runs commands inside the compatibility subsystem.
#[derive(Debug, Clone)]
pub struct CompatibilityExecutor {
    program: String,
}

impl CompatibilityExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CompatibilityExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_COMPAT_PROGRAM)
    }
}

impl Executor for CompatibilityExecutor {
    fn backend(&self) -> BackendKind {
        BackendKind::Compatibility
    }

    /// Runs `<program> --status` with its output discarded and no window.
    ///
    /// Available iff the status check exits with code 0. A status check that
    /// cannot be started at all counts as unavailable.
    fn is_available(&self) -> bool {
        let mut probe = Command::new(&self.program);
        probe
            .arg(STATUS_ARG)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            probe.creation_flags(CREATE_NO_WINDOW);
        }

        match probe.status() {
            Ok(status) => {
                debug!(program = %self.program, %status, "compatibility status check finished");
                status.code() == Some(0)
            }
            Err(e) => {
                warn!(program = %self.program, error = %e, "compatibility status check could not start");
                false
            }
        }
    }

    fn spawn_and_wait(&self, invocation: &Invocation) -> Result<ExitCode, ExecError> {
        let body = shell_body(&invocation.command, &invocation.args);
        debug!(command_line = %command_line(&self.program, &body), "forwarding to compatibility subsystem");

        let mut child = match self.command(&body).spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!(program = %self.program, error = %e, "compatibility subsystem failed to start");
                return Err(ExecError::NotFound {
                    command: invocation.command.clone(),
                });
            }
        };
        let status = child.wait().map_err(ExecError::Wait)?;
        Ok(exit_code(status))
    }
}

impl CompatibilityExecutor {
    /// `<program> sh -c "<body>"`, passed verbatim as the Windows command line.
    #[cfg(windows)]
    fn command(&self, body: &str) -> Command {
        use std::os::windows::process::CommandExt;
        let mut cmd = Command::new(&self.program);
        cmd.raw_arg(format!("sh -c \"{}\"", body))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Elsewhere the same body goes through argv; a POSIX `sh` reads `\"`
    /// outside quotes as a literal quote, so it parses the body identically.
    #[cfg(not(windows))]
    fn command(&self, body: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["sh", "-c", body])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

/// Joins the command and its arguments into the string given to `sh -c`.
///
/// Every `"` in an argument becomes `\"`. The command name is used as is.
pub fn shell_body(command: &str, args: &[String]) -> String {
    let mut body = String::from(command);
    for arg in args {
        body.push(' ');
        body.push_str(&arg.replace('"', "\\\""));
    }
    body
}

/// Full command line as the subsystem sees it on Windows.
pub fn command_line(program: &str, body: &str) -> String {
    format!("{} sh -c \"{}\"", program, body)
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => GENERAL_FAILURE,
    }
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> ExitCode {
    status.code().unwrap_or(GENERAL_FAILURE)
}
