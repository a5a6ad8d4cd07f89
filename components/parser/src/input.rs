//! Character cursor over source text.

use core_types::{SourcePosition, SyntaxError};

/// Character cursor owning the source text and the current position.
///
/// The lexer is the only consumer. It pulls characters one at a time
/// through [`advance`](InputStream::advance) and
/// [`peek`](InputStream::peek), and reports failures through
/// [`fail`](InputStream::fail), which captures the current line and
/// column. Consuming a newline increments the line counter and resets
/// the column to 0.
pub struct InputStream {
    chars: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
}

impl InputStream {
    /// Create a cursor at the start of the given source text.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            column: 0,
        }
    }

    /// Consume and return the character at the current position.
    ///
    /// Returns `'\0'` without moving when the cursor is past the end.
    pub fn advance(&mut self) -> char {
        if self.is_at_end() {
            return '\0';
        }
        let ch = self.chars[self.position];
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        ch
    }

    /// Return the character at the current position without consuming it.
    ///
    /// Returns `'\0'` when the cursor is past the end.
    pub fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.position]
        }
    }

    /// Check whether the cursor is past the final character.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Build a syntax error carrying the current position.
    ///
    /// The caller returns the error immediately, unwinding the whole
    /// parse; there is no recovery.
    pub fn fail(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.current_position())
    }

    /// The current position of the cursor.
    pub fn current_position(&self) -> SourcePosition {
        SourcePosition {
            line: self.line,
            column: self.column,
            offset: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_returns_characters_in_order() {
        let mut input = InputStream::new("ab");
        assert_eq!(input.advance(), 'a');
        assert_eq!(input.advance(), 'b');
        assert!(input.is_at_end());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut input = InputStream::new("x");
        assert_eq!(input.peek(), 'x');
        assert_eq!(input.peek(), 'x');
        assert_eq!(input.advance(), 'x');
    }

    #[test]
    fn test_newline_resets_column_and_increments_line() {
        let mut input = InputStream::new("a\nb");
        input.advance();
        assert_eq!(input.current_position().column, 1);
        input.advance();
        let pos = input.current_position();
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 0);
        input.advance();
        assert_eq!(input.current_position().column, 1);
    }

    #[test]
    fn test_advance_past_end_returns_nul() {
        let mut input = InputStream::new("");
        assert!(input.is_at_end());
        assert_eq!(input.advance(), '\0');
        assert_eq!(input.peek(), '\0');
    }

    #[test]
    fn test_fail_carries_current_position() {
        let mut input = InputStream::new("ab\ncd");
        for _ in 0..4 {
            input.advance();
        }
        let error = input.fail("boom");
        assert_eq!(error.message, "boom");
        assert_eq!(error.position.line, 2);
        assert_eq!(error.position.column, 1);
        assert_eq!(error.position.offset, 4);
    }
}
