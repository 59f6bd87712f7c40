//! Syntactic error type.

use lira_lex::LexError;
use lira_util::SourcePosition;
use thiserror::Error;

/// An error raised while parsing.
///
/// A lexical failure discovered while pulling tokens keeps its own kind
/// prefix; everything else renders as
/// `SyntaxError: Ln <line> Col <column> : <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("SyntaxError: {position} : {message}")]
    Syntax {
        message: String,
        position: SourcePosition,
    },

    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    /// Create a syntactic error at the given position.
    pub fn new(message: impl Into<String>, position: SourcePosition) -> Self {
        ParseError::Syntax {
            message: message.into(),
            position,
        }
    }

    /// The position the error points at.
    pub fn position(&self) -> SourcePosition {
        match self {
            ParseError::Syntax { position, .. } => *position,
            ParseError::Lex(err) => err.position,
        }
    }
}
