use crate::command::{Executor, ExitCode};
use crate::dispatch::Dispatcher;
use crate::executor::INSTALL_HINT;
use crate::io_adapters::{EditorReader, Line, LineReader};
use crate::lexer;
use crate::parser::{self, Statement};
use anyhow::Result;
use std::io::{self, Write};
use tracing::debug;

/// Prompt shown before every line unless configured otherwise.
pub const DEFAULT_PROMPT: &str = "minishell> ";

/// Whether the loop should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A minimal interactive shell.
///
/// Reads a line, splits it on whitespace and hands the command to a
/// [`Dispatcher`]. Every command runs in the foreground: the next prompt only
/// appears once it has terminated. `exit` (any case) or end of input stops
/// the loop.
///
/// Example
/// ```
/// use mini_shell::Interpreter;
/// use mini_shell::executor::CompatibilityExecutor;
/// use mini_shell::io_adapters::ScriptedReader;
///
/// let mut sh = Interpreter::new(Box::new(CompatibilityExecutor::default()), "$ ");
/// let mut input = ScriptedReader::new(["   ", "EXIT"]);
/// let mut out = Vec::new();
/// sh.repl_with(&mut input, &mut out, &mut std::io::sink()).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Bye!\n");
/// ```
pub struct Interpreter {
    dispatcher: Dispatcher,
    prompt: String,
    last_status: ExitCode,
}

impl Interpreter {
    pub fn new(executor: Box<dyn Executor>, prompt: impl Into<String>) -> Self {
        Self {
            dispatcher: Dispatcher::new(executor),
            prompt: prompt.into(),
            last_status: 0,
        }
    }

    /// Exit status of the most recent command, 0 before any has run.
    pub fn last_status(&self) -> ExitCode {
        self.last_status
    }

    /// Checks that the executor can run commands and prints the banner.
    ///
    /// When it cannot, prints the installation hint instead and returns
    /// `false`; the caller is expected to exit with status 1.
    pub fn start_up(&self, stdout: &mut dyn Write) -> io::Result<bool> {
        let executor = self.dispatcher.executor();
        if !executor.is_available() {
            writeln!(stdout, "{}", INSTALL_HINT)?;
            return Ok(false);
        }
        writeln!(stdout, "{}", executor.backend().banner())?;
        Ok(true)
    }

    /// Handles one input line.
    pub fn run_line(&mut self, line: &str, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Flow {
        let tokens = lexer::split_into_tokens(line);
        match parser::construct_statement(tokens) {
            None => Flow::Continue,
            Some(Statement::Exit) => {
                let _ = writeln!(stdout, "Bye!");
                Flow::Exit
            }
            Some(Statement::Invoke(invocation)) => {
                self.last_status = self.dispatcher.execute(&invocation, stdout, stderr);
                debug!(status = self.last_status, "ready for next line");
                Flow::Continue
            }
        }
    }

    /// Runs the loop over an arbitrary line source until `exit` or end of input.
    pub fn repl_with(
        &mut self,
        reader: &mut dyn LineReader,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<()> {
        loop {
            match reader.read_line(&self.prompt)? {
                Line::Text(line) => {
                    if self.run_line(&line, stdout, stderr) == Flow::Exit {
                        break;
                    }
                }
                Line::Interrupted => continue,
                Line::Eof => {
                    writeln!(stdout, "\nEOF detected. Exiting...")?;
                    break;
                }
            }
        }
        stdout.flush()?;
        Ok(())
    }

    /// Interactive loop on the terminal, using rustyline for line editing.
    pub fn repl(&mut self) -> Result<()> {
        let mut reader = EditorReader::new()?;
        self.repl_with(&mut reader, &mut io::stdout(), &mut io::stderr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{COMMAND_NOT_FOUND, Invocation};
    use crate::io_adapters::ScriptedReader;
    use crate::test_utils::{FakeExecutor, FakeOutcome};

    struct Session {
        out: String,
        err: String,
        invocations: Vec<Invocation>,
        prompts: usize,
        last_status: ExitCode,
    }

    fn session(lines: &[&str], outcomes: Vec<FakeOutcome>) -> Session {
        let fake = FakeExecutor::new(outcomes);
        let seen = fake.invocations();
        let mut sh = Interpreter::new(Box::new(fake), "> ");
        let mut reader = ScriptedReader::new(lines.iter().copied());
        let mut out = Vec::new();
        let mut err = Vec::new();
        sh.repl_with(&mut reader, &mut out, &mut err).unwrap();
        let invocations = seen.borrow().clone();
        Session {
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
            invocations,
            prompts: reader.prompts().len(),
            last_status: sh.last_status(),
        }
    }

    #[test]
    fn test_exit_says_bye() {
        let s = session(&["exit", "echo never"], vec![]);
        assert_eq!(s.out, "Bye!\n");
        assert!(s.invocations.is_empty());
        assert_eq!(s.prompts, 1);
    }

    #[test]
    fn test_exit_is_case_insensitive() {
        for line in ["EXIT", "Exit", "  eXiT  ", "exit 3"] {
            let s = session(&[line], vec![]);
            assert_eq!(s.out, "Bye!\n", "line {:?}", line);
        }
    }

    #[test]
    fn test_blank_lines_never_dispatch() {
        let s = session(&["", "   ", "\t", "exit"], vec![]);
        assert!(s.invocations.is_empty());
        assert_eq!(s.prompts, 4);
    }

    #[test]
    fn test_eof_notice() {
        let s = session(&[], vec![]);
        assert_eq!(s.out, "\nEOF detected. Exiting...\n");
        assert_eq!(s.prompts, 1);
    }

    #[test]
    fn test_command_passed_with_original_case() {
        let s = session(&["  Ls   -LA  ", "exit"], vec![]);
        assert_eq!(
            s.invocations,
            vec![Invocation::new("Ls", vec!["-LA".to_string()])]
        );
    }

    #[test]
    fn test_not_found_keeps_loop_running() {
        let s = session(
            &["definitelynotarealprogram123", "echo hello"],
            vec![FakeOutcome::NotFound, FakeOutcome::Exit(0)],
        );
        assert_eq!(
            s.out,
            "definitelynotarealprogram123: command not found\n\nEOF detected. Exiting...\n"
        );
        assert_eq!(s.invocations.len(), 2);
        assert_eq!(s.prompts, 3);
    }

    #[test]
    fn test_last_status_tracks_most_recent_command() {
        let s = session(&["false", "missing"], vec![FakeOutcome::Exit(1), FakeOutcome::NotFound]);
        assert_eq!(s.last_status, COMMAND_NOT_FOUND);

        let s = session(&["sh -c exit"], vec![FakeOutcome::Exit(42)]);
        assert_eq!(s.last_status, 42);
    }

    #[test]
    fn test_fork_failure_does_not_end_loop() {
        let s = session(&["ls", "pwd", "exit"], vec![FakeOutcome::ForkFailure]);
        assert_eq!(s.err, "Error: fork failed\n");
        assert_eq!(s.invocations.len(), 2);
        assert_eq!(s.out, "Bye!\n");
    }

    #[test]
    fn test_interrupt_reprompts() {
        let fake = FakeExecutor::new(vec![]);
        let seen = fake.invocations();
        let mut sh = Interpreter::new(Box::new(fake), "> ");
        let mut reader = ScriptedReader::default();
        reader.push(Line::Interrupted);
        reader.push(Line::Text("ls".into()));
        reader.push(Line::Text("exit".into()));
        let mut out = Vec::new();
        sh.repl_with(&mut reader, &mut out, &mut io::sink()).unwrap();
        assert_eq!(reader.prompts().len(), 3);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), "Bye!\n");
    }

    #[test]
    fn test_start_up_prints_banner_or_hint() {
        let sh = Interpreter::new(Box::new(FakeExecutor::new(vec![])), "> ");
        let mut out = Vec::new();
        assert!(sh.start_up(&mut out).unwrap());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Small Bash Shell running on WSL (Linux subsystem for Windows)\n"
        );

        let sh = Interpreter::new(Box::new(FakeExecutor::unavailable()), "> ");
        let mut out = Vec::new();
        assert!(!sh.start_up(&mut out).unwrap());
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("ERROR: WSL is not installed or not available.\n"));
        assert!(out.contains("wsl --install"));
    }
}
