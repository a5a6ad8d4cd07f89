//! Parser error constructors.

use core_types::{SourcePosition, SyntaxError};

use crate::lexer::Token;

/// Create an "expected X, got Y" error.
pub fn expected_token(expected: &str, got: &Token, position: SourcePosition) -> SyntaxError {
    SyntaxError::new(format!("Expected {}, got {}", expected, got), position)
}

/// Create an error for a token where an atom was required.
pub fn unexpected_token(got: &Token, position: SourcePosition) -> SyntaxError {
    SyntaxError::new(format!("Unexpected token: {}", got), position)
}

/// Create an error for a non-identifier in a parameter-name position.
pub fn expected_variable_name(got: &Token, position: SourcePosition) -> SyntaxError {
    SyntaxError::new(format!("Expected a variable name, got {}", got), position)
}
