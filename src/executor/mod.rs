//! The two ways of running a command: natively, or through the compatibility
//! subsystem. Both implement [`Executor`].

mod compat;
#[cfg(unix)]
mod native;

pub use compat::{
    CompatibilityExecutor, DEFAULT_COMPAT_PROGRAM, INSTALL_HINT, STATUS_ARG, command_line,
    shell_body,
};
#[cfg(unix)]
pub use native::NativeExecutor;

use crate::command::{BackendKind, Executor};
use anyhow::Result;

/// Creates the executor for `backend`.
///
/// `compat_program` is only used by the compatibility backend. Asking for the
/// native backend on a host without fork/exec is an error.
pub fn for_backend(backend: BackendKind, compat_program: &str) -> Result<Box<dyn Executor>> {
    match backend {
        #[cfg(unix)]
        BackendKind::Native => Ok(Box::new(NativeExecutor)),
        #[cfg(not(unix))]
        BackendKind::Native => Err(anyhow::anyhow!(
            "native execution is not supported on this platform"
        )),
        BackendKind::Compatibility => Ok(Box::new(CompatibilityExecutor::new(compat_program))),
    }
}
