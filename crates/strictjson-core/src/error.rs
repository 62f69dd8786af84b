//! Error types for JSON parsing.

use thiserror::Error;

/// Errors produced while turning text into a [`crate::Value`].
///
/// Both variants are terminal: a failed parse never yields a partial tree,
/// and the tokenizer produces no further tokens after a lexical error. The
/// `offset` is the byte position in the input at which the problem was
/// detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input violated JSON's character-level grammar: an unexpected
    /// character, a bad escape, an unterminated string, a malformed number,
    /// or a literal not preceded by a separator.
    #[error("lexical error at byte {offset}: {message}")]
    Lexical { offset: usize, message: String },

    /// The token stream violated JSON's structural grammar: an unexpected
    /// token for the current parser state, a duplicate object key, an
    /// unclosed container, empty input, or trailing content.
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },
}

impl ParseError {
    /// Byte offset into the input at which the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::Lexical { offset, .. } | ParseError::Syntax { offset, .. } => *offset,
        }
    }
}

/// Convenience alias used throughout strictjson-core.
pub type Result<T> = std::result::Result<T, ParseError>;
