use std::iter::FusedIterator;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{ErrorImpl, LexicalError},
    MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP, SINGLE_CHAR_LOOKUP};

lazy_static! {
    // A fraction is only part of the number when a digit follows the dot.
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap();
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[0-9A-Za-z_]+").unwrap();
}

/// One step of a scan: either a token or a recoverable error.
#[derive(Debug, Clone, PartialEq)]
pub enum Scanned {
    Token(Token),
    Error(LexicalError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexicalError>,
}

impl ScanResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Single-pass scanner over one source string.
///
/// Every way of driving the scan takes the lexer by value, so a lexer is
/// used for exactly one pass. Iterating yields tokens and errors in source
/// order and ends with a single `EOF` token.
#[derive(Debug)]
pub struct Lexer {
    source: String,
    start: usize,
    current: usize,
    line: usize,
    start_line: usize,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            source,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            finished: false,
        }
    }

    /// Runs the whole pass, then hands back every token and error at once.
    pub fn scan_tokens(self) -> ScanResult {
        let mut result = ScanResult::default();

        self.each_token(
            |token| result.tokens.push(token),
            |error| result.errors.push(error),
        );

        result
    }

    /// Runs the whole pass, calling `on_token` or `on_error` as soon as each is produced.
    pub fn each_token<T, E>(self, mut on_token: T, mut on_error: E)
    where
        T: FnMut(Token),
        E: FnMut(LexicalError),
    {
        for scanned in self {
            match scanned {
                Scanned::Token(token) => on_token(token),
                Scanned::Error(error) => on_error(error),
            }
        }
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.current..]
    }

    fn lexeme(&self) -> &str {
        &self.source[self.start..self.current]
    }

    fn advance(&mut self) -> char {
        let c = self.peek();
        if !self.at_eof() {
            self.current += c.len_utf8();
        }
        c
    }

    fn peek(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.at_eof() || self.peek() != expected {
            return false;
        }

        self.current += expected.len_utf8();
        true
    }

    fn token(&self, kind: TokenKind) -> Scanned {
        Scanned::Token(MK_TOKEN!(kind, self.lexeme().to_string(), self.start_line))
    }

    fn error(&self, error_impl: ErrorImpl) -> Scanned {
        Scanned::Error(LexicalError::new(error_impl, self.line))
    }

    fn scan_token(&mut self) -> Option<Scanned> {
        self.start = self.current;
        self.start_line = self.line;

        let c = self.advance();

        if let Some(kind) = SINGLE_CHAR_LOOKUP.get(&c) {
            return Some(self.token(*kind));
        }

        match c {
            ' ' | '\r' | '\t' => None,
            '\n' => {
                self.line += 1;
                None
            }
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                Some(self.token(kind))
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                Some(self.token(kind))
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                Some(self.token(kind))
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                Some(self.token(kind))
            }
            '/' => {
                if self.match_char('/') {
                    // Comment runs up to, not including, the newline.
                    while self.peek() != '\n' && !self.at_eof() {
                        self.advance();
                    }
                    None
                } else {
                    Some(self.token(TokenKind::Slash))
                }
            }
            '"' => Some(self.string()),
            c if is_digit(c) => Some(self.number()),
            c if is_identifier_char(c) => Some(self.identifier()),
            character => Some(self.error(ErrorImpl::UnexpectedCharacter { character })),
        }
    }

    fn string(&mut self) -> Scanned {
        while self.peek() != '"' && !self.at_eof() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.at_eof() {
            return self.error(ErrorImpl::UnterminatedString);
        }

        // The closing quote.
        self.advance();

        let value = self.source[(self.start + 1)..(self.current - 1)].to_string();
        Scanned::Token(MK_TOKEN!(
            TokenKind::String,
            self.lexeme().to_string(),
            Literal::String(value),
            self.start_line
        ))
    }

    fn number(&mut self) -> Scanned {
        self.current = self.run_end(&NUMBER_PATTERN);

        // The pattern only admits digits with an optional fraction, which always parse.
        let value: f64 = self.lexeme().parse().unwrap_or_default();
        Scanned::Token(MK_TOKEN!(
            TokenKind::Number,
            self.lexeme().to_string(),
            Literal::Number(value),
            self.start_line
        ))
    }

    fn identifier(&mut self) -> Scanned {
        self.current = self.run_end(&IDENTIFIER_PATTERN);

        match RESERVED_LOOKUP.get(self.lexeme()) {
            Some(kind) => self.token(*kind),
            None => self.token(TokenKind::Identifier),
        }
    }

    /// End offset of the longest run matching `pattern` from the lexeme start.
    fn run_end(&self, pattern: &Regex) -> usize {
        pattern
            .find(&self.source[self.start..])
            .map_or(self.current, |matched| self.start + matched.end())
    }
}

impl Iterator for Lexer {
    type Item = Scanned;

    fn next(&mut self) -> Option<Scanned> {
        if self.finished {
            return None;
        }

        while !self.at_eof() {
            if let Some(scanned) = self.scan_token() {
                return Some(scanned);
            }
        }

        self.finished = true;
        Some(Scanned::Token(MK_TOKEN!(TokenKind::EOF, String::new(), self.line)))
    }
}

impl FusedIterator for Lexer {}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn tokenize(source: String) -> ScanResult {
    Lexer::new(source).scan_tokens()
}
