use anyhow::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;

/// One result of asking the user for a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A line of input, without its line terminator.
    Text(String),
    /// The user pressed Ctrl-C at the prompt.
    Interrupted,
    /// Input is closed.
    Eof,
}

/// Source of input lines for the interactive loop.
pub trait LineReader {
    /// Shows `prompt` and waits for the next line.
    fn read_line(&mut self, prompt: &str) -> Result<Line>;
}

/// Line reader backed by a rustyline editor with in-memory history.
///
/// When stdin is not a terminal rustyline reads plain lines and shows no
/// prompt.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("failed to set up line editor")?;
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Line> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Line::Text(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            Err(err) => Err(err).context("failed to read input line"),
        }
    }
}

/// Line reader fed from memory; reports [`Line::Eof`] once drained.
///
/// Every prompt it is asked to show is recorded.
#[derive(Debug, Default)]
pub struct ScriptedReader {
    lines: VecDeque<Line>,
    prompts: Vec<String>,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(|l| Line::Text(l.into())).collect(),
            prompts: Vec::new(),
        }
    }

    /// Queues an arbitrary [`Line`], e.g. an interrupt.
    pub fn push(&mut self, line: Line) {
        self.lines.push_back(line);
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> Result<Line> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front().unwrap_or(Line::Eof))
    }
}
