//! Test doubles shared by the unit tests.

use crate::command::{BackendKind, Executor, ExitCode, Invocation};
use crate::error::ExecError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

/// What the next call to [`FakeExecutor::spawn_and_wait`] should do.
#[derive(Debug, Clone, Copy)]
pub enum FakeOutcome {
    Exit(ExitCode),
    NotFound,
    ForkFailure,
}

/// Executor that records every invocation instead of running it.
///
/// Outcomes are consumed in order; once they run out every call exits with 0.
pub struct FakeExecutor {
    outcomes: RefCell<VecDeque<FakeOutcome>>,
    seen: Rc<RefCell<Vec<Invocation>>>,
    available: bool,
}

impl FakeExecutor {
    pub fn new(outcomes: Vec<FakeOutcome>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into()),
            seen: Rc::new(RefCell::new(Vec::new())),
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(Vec::new())
        }
    }

    /// Handle to the recorded invocations, usable after the executor is boxed.
    pub fn invocations(&self) -> Rc<RefCell<Vec<Invocation>>> {
        self.seen.clone()
    }
}

impl Executor for FakeExecutor {
    fn backend(&self) -> BackendKind {
        BackendKind::Compatibility
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn spawn_and_wait(&self, invocation: &Invocation) -> Result<ExitCode, ExecError> {
        self.seen.borrow_mut().push(invocation.clone());
        match self.outcomes.borrow_mut().pop_front() {
            None => Ok(0),
            Some(FakeOutcome::Exit(code)) => Ok(code),
            Some(FakeOutcome::NotFound) => Err(ExecError::NotFound {
                command: invocation.command.clone(),
            }),
            Some(FakeOutcome::ForkFailure) => Err(ExecError::Fork(io::Error::from(
                io::ErrorKind::OutOfMemory,
            ))),
        }
    }
}
