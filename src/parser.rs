use crate::command::Invocation;

/// What a tokenized input line asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Leave the shell. Any arguments after `exit` are ignored.
    Exit,
    /// Run a program.
    Invoke(Invocation),
}

/// Builds a [`Statement`] from the tokens of one line.
///
/// Returns `None` when there are no tokens. The first token is compared
/// against `exit` case-insensitively; when it is anything else it becomes the
/// command name with its original case.
pub fn construct_statement(tokens: Vec<String>) -> Option<Statement> {
    let mut tokens = tokens.into_iter();
    let command = tokens.next()?;
    if command.to_lowercase() == "exit" {
        return Some(Statement::Exit);
    }
    Some(Statement::Invoke(Invocation::new(command, tokens.collect())))
}
