#![allow(clippy::module_inception)]

use std::{
    fs,
    io::{BufRead, Write},
    path::Path,
};

use crate::{
    errors::errors::DriverError,
    lexer::lexer::{Lexer, Scanned},
};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub const EXIT_USAGE: i32 = 64;
pub const EXIT_DATA_ERROR: i32 = 65;
pub const EXIT_IO_ERROR: i32 = 74;

/// Formats one diagnostic line: `[line 3] Error : Unexpected character.`
pub fn report(line: usize, location: &str, message: &str) -> String {
    format!("[line {}] Error {}: {}", line, location, message)
}

/// Scans `source`, writing diagnostics as they are found and then every token.
///
/// Returns whether any lexical error was reported.
pub fn run<W: Write>(source: String, out: &mut W) -> Result<bool, DriverError> {
    let mut tokens = vec![];
    let mut had_error = false;

    for scanned in Lexer::new(source) {
        match scanned {
            Scanned::Token(token) => tokens.push(token),
            Scanned::Error(error) => {
                writeln!(out, "{}", report(error.get_line(), "", &error.get_message()))?;
                had_error = true;
            }
        }
    }

    for token in &tokens {
        writeln!(out, "{}", token)?;
    }

    Ok(had_error)
}

pub fn run_file<W: Write>(path: &Path, out: &mut W) -> Result<bool, DriverError> {
    let source = fs::read_to_string(path).map_err(|source| DriverError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    run(source, out)
}

/// Reads and scans one line at a time until `input` is exhausted.
///
/// Each line is scanned on its own, so an error on one line has no effect on the next.
pub fn run_prompt<R: BufRead, W: Write>(mut input: R, out: &mut W) -> Result<(), DriverError> {
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        run(line.trim_end_matches(&['\n', '\r'][..]).to_string(), out)?;
    }
}
