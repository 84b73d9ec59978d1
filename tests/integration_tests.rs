//! Integration tests for the command-line driver.
//!
//! These run whole sources through the library entry points and check the
//! printed token listing, the diagnostics, and the error flag.

use pretty_assertions::assert_eq;
use rlox::{
    errors::errors::DriverError, lexer::lexer::tokenize, run, run_file, run_prompt,
};
use std::{fs, io::Cursor, path::PathBuf};

fn run_to_string(source: &str) -> (bool, String) {
    let mut out = Vec::new();
    let had_error = run(source.to_string(), &mut out).unwrap();
    (had_error, String::from_utf8(out).unwrap())
}

#[test]
fn test_run_clean_program() {
    let (had_error, output) = run_to_string("var x = \"hi\";");

    assert!(!had_error);
    assert_eq!(
        output,
        "VAR var nil\nIDENTIFIER x nil\nEQUAL = nil\nSTRING \"hi\" hi\nSEMICOLON ; nil\nEOF  nil\n"
    );
}

#[test]
fn test_run_numbers_and_lines() {
    let (had_error, output) = run_to_string("(+ 3.14)\n// comment\n1.");

    assert!(!had_error);
    assert_eq!(
        output,
        "LEFT_PAREN ( nil\nPLUS + nil\nNUMBER 3.14 3.14\nRIGHT_PAREN ) nil\nNUMBER 1 1.0\nDOT . nil\nEOF  nil\n"
    );
}

#[test]
fn test_run_reports_each_error() {
    let (had_error, output) = run_to_string("print 1;\n@\n\"never closed");

    assert!(had_error);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "[line 2] Error : Unexpected character.");
    assert_eq!(lines[1], "[line 3] Error : Unterminated string.");
    assert_eq!(
        lines[2..].to_vec(),
        vec!["PRINT print nil", "NUMBER 1 1.0", "SEMICOLON ; nil", "EOF  nil"]
    );
}

#[test]
fn test_run_file() {
    let path = std::env::temp_dir().join(format!("rlox_run_file_{}.lox", std::process::id()));
    fs::write(&path, "fun f() {\n  return a != b;\n}\n").unwrap();

    let mut out = Vec::new();
    let had_error = run_file(&path, &mut out).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(!had_error);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("BANG_EQUAL != nil\n"));
    assert!(output.ends_with("RIGHT_BRACE } nil\nEOF  nil\n"));
}

#[test]
fn test_run_file_missing() {
    let mut out = Vec::new();
    let result = run_file(&PathBuf::from("definitely/not/here.lox"), &mut out);

    assert!(matches!(result, Err(DriverError::ReadFile { .. })));
    assert!(out.is_empty());
}

#[test]
fn test_prompt_scans_each_line_separately() {
    let input = Cursor::new("1 @\nx\n");
    let mut out = Vec::new();

    run_prompt(input, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "> [line 1] Error : Unexpected character.\nNUMBER 1 1.0\nEOF  nil\n> IDENTIFIER x nil\nEOF  nil\n> "
    );
}

#[test]
fn test_every_lexeme_is_a_source_slice() {
    let source = "class A < B {\n  init() { this.n = 0.5; super.go(); }\n}\nwhile (true and !false) print nil;";
    let result = tokenize(source.to_string());

    assert!(result.errors.is_empty());
    let joined: String = result.tokens.iter().map(|token| token.lexeme.as_str()).collect();
    let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(joined, stripped);
}
