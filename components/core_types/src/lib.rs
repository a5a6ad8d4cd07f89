//! Core types shared across the Brio front end.
//!
//! Provides the source position and syntax error types used by the
//! lexer, the parser, and the CLI.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod source;

pub use error::SyntaxError;
pub use source::SourcePosition;
