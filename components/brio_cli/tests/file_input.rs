//! File-based tests for the CLI pipeline.

use std::io::Write;

use brio_cli::{CliError, Pipeline};

#[test]
fn test_parse_file_emits_ast_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "greet = fun (name) print(\"hi\", name);").unwrap();
    writeln!(file, "greet(\"world\")").unwrap();

    let json = Pipeline::new()
        .parse_file(file.path().to_str().unwrap())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["type"], "Block");
    let statements = value["statements"].as_array().unwrap();
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0]["type"], "Assignment");
    assert_eq!(statements[1]["type"], "Call");
}

#[test]
fn test_parse_file_reports_syntax_error_position() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x = 1;").unwrap();
    write!(file, "y = (2").unwrap();

    let error = Pipeline::new()
        .parse_file(file.path().to_str().unwrap())
        .unwrap_err();

    match error {
        CliError::Syntax(syntax) => {
            assert!(syntax.message.contains("Expected ')'"));
            assert_eq!(syntax.position.line, 2);
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}
