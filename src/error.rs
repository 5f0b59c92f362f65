// ABOUTME: Error types for the interpreter front end

use thiserror::Error;

/// Failures raised while turning source text into an AST.
///
/// Language-level failures are `Value::Error` and never travel through this
/// type; it only covers syntax problems, whose `Display` output is the
/// diagnostic printed at the REPL and embedded in `load` errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `(` or `{` was opened but its closing bracket never arrived.
    #[error("expected '{expected}' before end of input")]
    Unclosed { expected: char },

    /// Input that no grammar rule matches, e.g. a stray `)`.
    #[error("unexpected input near '{near}'")]
    Unexpected { near: String },
}
