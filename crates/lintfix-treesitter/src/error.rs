use lintfix_core::FixError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while parsing or updating a Go file.
pub enum GoSyntaxError {
    #[error("tree-sitter language error: {0}")]
    /// The Go grammar could not be loaded into the parser.
    Language(String),

    #[error("tree-sitter produced no tree")]
    /// Parsing was cancelled or failed outright.
    Parse,

    #[error(transparent)]
    /// The edit could not be applied to the live text.
    Edit(#[from] FixError),
}
