//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance, with or without a literal

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source text of the token
/// * `$literal` - The literal value, omitted for tokens that carry none
/// * `$line` - The line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Literal::Number(42.0), 1);
/// let token = MK_TOKEN!(TokenKind::Semicolon, ";".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: None,
            line: $line,
        }
    };
    ($kind:expr, $lexeme:expr, $literal:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: Some($literal),
            line: $line,
        }
    };
}
