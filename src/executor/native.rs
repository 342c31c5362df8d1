//! Direct execution with fork, execvp and waitpid.

use crate::command::{BackendKind, COMMAND_NOT_FOUND, Executor, ExitCode, Invocation};
use crate::error::ExecError;
use nix::errno::Errno;
use nix::libc;
use nix::sys::wait::{WaitStatus, waitpid};
use nix::unistd::{ForkResult, Pid, fork};
use std::ffi::CString;
use std::io::Write;
use tracing::{debug, error};

/// Runs commands as direct children of the shell process.
///
/// The child inherits stdin, stdout and stderr unchanged. The program is
/// looked up through `PATH` by `execvp`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeExecutor;

impl Executor for NativeExecutor {
    fn backend(&self) -> BackendKind {
        BackendKind::Native
    }

    fn spawn_and_wait(&self, invocation: &Invocation) -> Result<ExitCode, ExecError> {
        // Everything the child touches is allocated before fork.
        let argv = c_argv(invocation)?;
        let mut argv_ptrs: Vec<*const libc::c_char> = argv.iter().map(|a| a.as_ptr()).collect();
        argv_ptrs.push(std::ptr::null());
        let not_found = format!("{}: command not found\n", invocation.command);

        // Anything still buffered would otherwise be written by both processes.
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();

        // SAFETY: between fork and exec the child only calls async-signal-safe
        // functions (execvp, write, _exit) on memory prepared above.
        match unsafe { fork() } {
            Ok(ForkResult::Child) => unsafe {
                libc::execvp(argv_ptrs[0], argv_ptrs.as_ptr());
                // execvp only returns on failure
                let _ = libc::write(
                    libc::STDOUT_FILENO,
                    not_found.as_ptr().cast(),
                    not_found.len(),
                );
                libc::_exit(COMMAND_NOT_FOUND)
            },
            Ok(ForkResult::Parent { child }) => {
                debug!(pid = %child, command = %invocation.command, "spawned child");
                wait_for(child)
            }
            Err(errno) => {
                error!(%errno, command = %invocation.command, "fork failed");
                Err(ExecError::Fork(errno.into()))
            }
        }
    }
}

/// Builds `[command, args...]` as C strings.
fn c_argv(invocation: &Invocation) -> Result<Vec<CString>, ExecError> {
    std::iter::once(&invocation.command)
        .chain(&invocation.args)
        .map(|arg| {
            CString::new(arg.as_str()).map_err(|_| ExecError::InvalidArgument {
                command: invocation.command.clone(),
                arg: arg.clone(),
            })
        })
        .collect()
}

/// Blocks until `child` terminates and converts its status to an exit code.
///
/// A child killed by a signal reports `128 + signal`, like POSIX shells do.
fn wait_for(child: Pid) -> Result<ExitCode, ExecError> {
    loop {
        match waitpid(child, None) {
            Ok(WaitStatus::Exited(_, code)) => return Ok(code),
            Ok(WaitStatus::Signaled(_, signal, _)) => return Ok(128 + signal as i32),
            Ok(_) => continue,
            Err(Errno::EINTR) => continue,
            Err(errno) => {
                error!(%errno, pid = %child, "waitpid failed");
                return Err(ExecError::Wait(errno.into()));
            }
        }
    }
}
