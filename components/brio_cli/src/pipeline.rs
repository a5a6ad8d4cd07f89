//! Pipeline orchestration: source text in, AST JSON out.

use std::fs;

use parser::Parser;

use crate::error::CliResult;

/// Runs the front-end pipeline and serializes the result.
///
/// # Example
/// ```
/// use brio_cli::Pipeline;
///
/// let pipeline = Pipeline::new();
/// let json = pipeline.parse_source("1 + 2;").unwrap();
/// assert!(json.contains("\"type\":\"Block\""));
/// ```
#[derive(Debug, Default)]
pub struct Pipeline {
    /// Whether to pretty-print the JSON output
    pretty: bool,
}

impl Pipeline {
    /// Create a new pipeline with compact JSON output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable pretty-printed JSON output.
    pub fn with_pretty(mut self, enabled: bool) -> Self {
        self.pretty = enabled;
        self
    }

    /// Parse a source file and return the AST as JSON.
    ///
    /// # Errors
    /// Returns `CliError` if the file cannot be read or the source does
    /// not parse.
    pub fn parse_file(&self, path: &str) -> CliResult<String> {
        let source = fs::read_to_string(path)?;
        self.parse_source(&source)
    }

    /// Parse source text and return the AST as JSON.
    ///
    /// # Errors
    /// Returns `CliError` if the source does not parse.
    pub fn parse_source(&self, source: &str) -> CliResult<String> {
        let ast = Parser::new(source).parse()?;
        let json = if self.pretty {
            serde_json::to_string_pretty(&ast)?
        } else {
            serde_json::to_string(&ast)?
        };
        Ok(json)
    }
}
