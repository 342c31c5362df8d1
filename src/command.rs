use crate::error::ExecError;
use std::fmt;
use std::str::FromStr;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// Status reported when the requested program could not be found or started.
pub const COMMAND_NOT_FOUND: ExitCode = 127;

/// Status reported when the shell itself failed to run the command
/// (fork or wait failure, malformed argument).
pub const GENERAL_FAILURE: ExitCode = 1;

/// A single parsed command line: the program name and its arguments.
///
/// Built fresh for every input line and dropped once the dispatcher returns.
/// The command name keeps the case the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

/// Which way commands reach the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Direct fork/exec on the host.
    Native,
    /// Forwarded through the Linux compatibility subsystem (WSL).
    Compatibility,
}

impl BackendKind {
    /// Backend chosen at build time for the current target.
    pub const fn host() -> Self {
        if cfg!(unix) {
            BackendKind::Native
        } else {
            BackendKind::Compatibility
        }
    }

    /// Line printed once at startup before the first prompt.
    pub fn banner(self) -> &'static str {
        match self {
            BackendKind::Native => "Running in native Unix/Linux mode",
            BackendKind::Compatibility => {
                "Small Bash Shell running on WSL (Linux subsystem for Windows)"
            }
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Native => f.write_str("native"),
            BackendKind::Compatibility => f.write_str("wsl"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" => Ok(BackendKind::Native),
            "wsl" | "compat" | "compatibility" => Ok(BackendKind::Compatibility),
            other => Err(format!(
                "unknown backend `{}`, expected `native` or `wsl`",
                other
            )),
        }
    }
}

/// Object-safe strategy for running one command to completion.
///
/// Implemented by the native fork/exec executor and by the compatibility
/// subsystem executor. The shell picks one at startup and keeps it.
pub trait Executor {
    /// Which backend this executor implements.
    fn backend(&self) -> BackendKind;

    /// Whether the executor can run anything at all on this host.
    ///
    /// Native execution is always available; the compatibility executor
    /// runs its status check.
    fn is_available(&self) -> bool {
        true
    }

    /// Runs `invocation` with inherited standard streams and blocks until it
    /// terminates. Returns the child's exit status.
    fn spawn_and_wait(&self, invocation: &Invocation) -> Result<ExitCode, ExecError>;
}
