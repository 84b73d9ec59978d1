//! Lexical analysis.
//!
//! This module contains the scanner that converts source text into a
//! sequence of tokens for a parser. It handles:
//!
//! - Single- and two-character operators and punctuation
//! - Number and string literals, identifiers and reserved words
//! - Line tracking for diagnostics
//! - Comments and whitespace
//! - Recoverable lexical errors reported alongside the tokens

pub mod lexer;
pub mod tokens;
