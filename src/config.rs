//! Command-line configuration.
//!
//! There is no config file and no environment variable; everything comes from
//! flags, and every flag has a default.

use crate::command::{BackendKind, Executor};
use crate::executor::{self, DEFAULT_COMPAT_PROGRAM};
use crate::interpreter::DEFAULT_PROMPT;
use crate::logging::LogLevel;
use anyhow::Result;
use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// A minimal interactive command shell. Commands run natively on Unix and
/// through WSL on Windows.
pub struct CliArgs {
    #[argh(option)]
    /// prompt shown before each line.
    pub prompt: Option<String>,

    #[argh(option)]
    /// execution backend, `native` or `wsl`. Defaults to native on Unix and wsl elsewhere.
    pub backend: Option<BackendKind>,

    #[argh(option)]
    /// executable used to reach the compatibility subsystem (default `wsl.exe`).
    pub compat_program: Option<String>,

    #[argh(option)]
    /// log verbosity: error, warn, info, debug or trace (default warn).
    pub log_level: Option<LogLevel>,
}

/// Settings the shell runs with, after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub backend: BackendKind,
    pub compat_program: String,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            backend: BackendKind::host(),
            compat_program: DEFAULT_COMPAT_PROGRAM.to_string(),
            log_level: LogLevel::Warn,
        }
    }
}

impl Config {
    pub fn from_args(args: CliArgs) -> Self {
        let defaults = Config::default();
        Self {
            prompt: args.prompt.unwrap_or(defaults.prompt),
            backend: args.backend.unwrap_or(defaults.backend),
            compat_program: args.compat_program.unwrap_or(defaults.compat_program),
            log_level: args.log_level.unwrap_or(defaults.log_level),
        }
    }

    /// Builds the executor for the configured backend.
    pub fn executor(&self) -> Result<Box<dyn Executor>> {
        executor::for_backend(self.backend, &self.compat_program)
    }
}
