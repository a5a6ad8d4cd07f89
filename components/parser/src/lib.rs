//! Brio Parser Component
//!
//! Front end for the Brio expression language: characters in,
//! abstract syntax tree out. Data flows strictly one way through three
//! layers, each pulled on demand by the one above:
//!
//! - [`InputStream`] - character cursor with position tracking
//! - [`Lexer`] - tokenizes source code, one token of lookahead
//! - [`Parser`] - recursive descent parser producing the AST
//! - [`Node`] - Abstract Syntax Tree node types
//!
//! # Example
//!
//! ```
//! use parser::{Node, Parser};
//!
//! let source = "x = 1 + 2;";
//! let mut parser = Parser::new(source);
//! let ast = parser.parse().unwrap();
//!
//! assert!(matches!(ast, Node::Block { .. }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod input;
pub mod lexer;
pub mod parser;

pub use ast::Node;
pub use input::InputStream;
pub use lexer::{Keyword, Lexer, Punctuator, Token};
pub use parser::Parser;
