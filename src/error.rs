//! Errors raised while running a command.
//!
//! None of these leave the [`Dispatcher`](crate::dispatch::Dispatcher): it turns
//! each one into a message and an exit status.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("{command}: command not found")]
    NotFound { command: String },

    #[error("fork failed: {0}")]
    Fork(#[source] std::io::Error),

    #[error("waiting for child failed: {0}")]
    Wait(#[source] std::io::Error),

    #[error("{command}: argument contains a NUL byte: {arg:?}")]
    InvalidArgument { command: String, arg: String },
}
