//! Unit tests for SourcePosition

use core_types::SourcePosition;

#[cfg(test)]
mod source_position_tests {
    use super::*;

    #[test]
    fn test_source_position_creation() {
        let pos = SourcePosition {
            line: 10,
            column: 5,
            offset: 150,
        };

        assert_eq!(pos.line, 10);
        assert_eq!(pos.column, 5);
        assert_eq!(pos.offset, 150);
    }

    #[test]
    fn test_source_position_start_of_input() {
        // The cursor starts at line 1, column 0, offset 0.
        let pos = SourcePosition {
            line: 1,
            column: 0,
            offset: 0,
        };

        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 0);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_source_position_clone() {
        let pos1 = SourcePosition {
            line: 42,
            column: 7,
            offset: 1000,
        };
        let pos2 = pos1.clone();

        assert_eq!(pos1, pos2);
    }

    #[test]
    fn test_source_position_equality() {
        let a = SourcePosition {
            line: 2,
            column: 3,
            offset: 10,
        };
        let b = SourcePosition {
            line: 2,
            column: 3,
            offset: 10,
        };
        let c = SourcePosition {
            line: 2,
            column: 4,
            offset: 11,
        };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
