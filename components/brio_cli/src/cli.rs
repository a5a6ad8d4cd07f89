//! Command-line argument definitions.

use clap::Parser;

/// Brio front end: parse a program and print its AST as JSON.
#[derive(Debug, Parser)]
#[command(name = "brio", version, about)]
pub struct Cli {
    /// Source file to parse
    pub file: Option<String>,

    /// Parse inline source text instead of a file
    #[arg(short, long, value_name = "CODE")]
    pub eval: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
