//! Lexical error type.

use lira_util::SourcePosition;
use thiserror::Error;

/// An error raised while tokenizing source text or an exchange-rate table.
///
/// Renders as a single line in the pipeline's uniform error shape:
/// `LexicalError: Ln <line> Col <column> : <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("LexicalError: {position} : {message}")]
pub struct LexError {
    /// Human-readable description of what failed to tokenize.
    pub message: String,
    /// Position of the offending character or token start.
    pub position: SourcePosition,
}

impl LexError {
    /// Create a new lexical error at the given position.
    pub fn new(message: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}
