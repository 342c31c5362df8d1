//! A minimal interactive command shell.
//!
//! Each input line is split on whitespace; the first word names a program and
//! the rest are its arguments. The program runs in the foreground with the
//! shell's standard streams and the next prompt appears once it has exited.
//! There is no shell grammar: no pipes, redirects, quoting or variables. The
//! only built-in is `exit`.
//!
//! How a program is started depends on the platform. On Unix the shell forks
//! and execs it directly ([`executor::NativeExecutor`]). Elsewhere it hands the
//! command line to WSL ([`executor::CompatibilityExecutor`]), after checking
//! at startup that WSL is installed.
//!
//! The main entry point is [`Interpreter`].

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod interpreter;
pub mod io_adapters;
pub mod lexer;
pub mod logging;
pub mod parser;
#[cfg(test)]
mod test_utils;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
