//! Source position tracking for error reporting.

/// Represents a position in source code.
///
/// Used for error reporting to indicate where a problem occurred.
/// Lines are 1-indexed; columns are 0-indexed and count characters
/// consumed on the current line.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition {
///     line: 10,
///     column: 5,
///     offset: 150,
/// };
///
/// assert_eq!(pos.line, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePosition {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (0-indexed)
    pub column: u32,
    /// Character offset from the start of the source
    pub offset: usize,
}
