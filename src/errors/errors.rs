use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

/// A malformed lexeme found during a scan, tagged with the line where it was detected.
///
/// Lexical errors never stop the scanner; they are collected alongside the tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    internal_error: ErrorImpl,
    line: usize,
}

impl LexicalError {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        LexicalError {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The fixed, user-facing message text.
    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }
}

impl Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.internal_error)
    }
}

impl std::error::Error for LexicalError {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Unexpected character.")]
    UnexpectedCharacter { character: char },
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// Failures of the command-line driver itself, as opposed to problems in the scanned source.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("could not read {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
