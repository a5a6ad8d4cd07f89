//! Syntax error type for the front end.
//!
//! There is a single error taxonomy: every lexical or structural
//! failure is a [`SyntaxError`] carrying a message and the cursor
//! position at the moment of failure. The first error aborts the whole
//! parse; no partial token list or AST is ever returned.

use thiserror::Error;

use crate::SourcePosition;

/// A syntax error raised by the lexer or the parser.
///
/// # Examples
///
/// ```
/// use core_types::{SourcePosition, SyntaxError};
///
/// let error = SyntaxError::new(
///     "Unexpected character: '`'",
///     SourcePosition { line: 1, column: 0, offset: 0 },
/// );
///
/// assert_eq!(error.to_string(), "Unexpected character: '`' (line 1, column 0)");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (line {}, column {})", .position.line, .position.column)]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Position in the source where the error occurred
    pub position: SourcePosition,
}

impl SyntaxError {
    /// Create a syntax error at a given position.
    pub fn new(message: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}
