//! Unit tests for SyntaxError

use core_types::{SourcePosition, SyntaxError};

#[cfg(test)]
mod syntax_error_tests {
    use super::*;

    fn position() -> SourcePosition {
        SourcePosition {
            line: 4,
            column: 12,
            offset: 80,
        }
    }

    #[test]
    fn test_syntax_error_creation() {
        let error = SyntaxError::new("Unexpected character: '@'", position());

        assert_eq!(error.message, "Unexpected character: '@'");
        assert_eq!(error.position, position());
    }

    #[test]
    fn test_syntax_error_accepts_owned_message() {
        let error = SyntaxError::new(format!("Expected '{}'", ';'), position());
        assert_eq!(error.message, "Expected ';'");
    }

    #[test]
    fn test_syntax_error_display() {
        let error = SyntaxError::new("Expected keyword 'then'", position());
        assert_eq!(
            error.to_string(),
            "Expected keyword 'then' (line 4, column 12)"
        );
    }

    #[test]
    fn test_syntax_error_implements_std_error() {
        let error = SyntaxError::new("boom", position());
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn test_syntax_error_clone() {
        let error = SyntaxError::new("boom", position());
        assert_eq!(error, error.clone());
    }
}
