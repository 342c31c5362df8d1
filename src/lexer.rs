//! Tokenization of a raw input line.
//!
//! There is no quoting, escaping or substitution: a token is a maximal run
//! of non-whitespace characters.

/// Splits `line` into whitespace-separated tokens, in order.
///
/// Leading and trailing whitespace (spaces, tabs, `\r`, `\n`) is ignored, so
/// `"  ls   -la  "` and `"ls -la"` yield the same tokens. Empty or
/// whitespace-only input yields no tokens.
pub fn split_into_tokens(line: &str) -> Vec<String> {
    line.trim().split_whitespace().map(str::to_owned).collect()
}
