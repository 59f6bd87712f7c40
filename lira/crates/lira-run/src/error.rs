//! Semantic (runtime) error type.

use lira_util::SourcePosition;
use thiserror::Error;

/// An error raised while interpreting a program.
///
/// Renders as `SemanticError: Ln <line> Col <column> : <message>`. The
/// interpreter never continues past the first semantic error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("SemanticError: {position} : {message}")]
pub struct RuntimeError {
    /// What went wrong.
    pub message: String,
    /// Position of the offending expression, statement or call.
    pub position: SourcePosition,
}

impl RuntimeError {
    /// Create a new semantic error at the given position.
    pub fn new(message: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}
