//! Brio CLI Library
//!
//! Thin glue around the parser component: read source text, run the
//! pipeline, serialize the resulting AST as JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod pipeline;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use pipeline::Pipeline;
