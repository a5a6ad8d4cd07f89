//! Brio CLI
//!
//! Entry point for the Brio front end. Parses CLI arguments, runs the
//! pipeline, and prints the resulting AST as JSON.

use brio_cli::{Cli, CliError, Pipeline};
use clap::Parser as ClapParser;

fn main() {
    let cli = Cli::parse();

    let pipeline = Pipeline::new().with_pretty(cli.pretty);

    if let Some(file) = cli.file {
        match pipeline.parse_file(&file) {
            Ok(json) => println!("{}", json),
            Err(CliError::Io(e)) => {
                eprintln!("Error: Could not read file '{}': {}", file, e);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    } else if let Some(code) = cli.eval {
        match pipeline.parse_source(&code) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    } else {
        // No input given: show usage.
        println!("Brio front end v0.1.0");
        println!();
        println!("Usage:");
        println!("  brio <FILE>            Parse a Brio file and print its AST");
        println!("  brio --eval <CODE>     Parse inline Brio code");
        println!();
        println!("Run 'brio --help' for more options.");
    }
}
