//! Tokens produced by the formula scanner.
//!
//! The surface syntax of a formula uses `v` for OR, `^` for AND, `!` for
//! prefix negation, parentheses for grouping, and bare identifiers for
//! literals. Each token records the zero-based offset of its first character
//! in the source so that diagnostics can point back at the input.

use std::fmt;

/// The closed set of token kinds the scanner can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// A named boolean variable, e.g. `p` or `rain_tomorrow`.
    Literal,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `!`
    Not,
    /// `v`
    Or,
    /// `^`
    And,
    /// The end-of-input sentinel. Every scanned stream ends with exactly one.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Literal => "literal",
            Self::LeftParen => "`('",
            Self::RightParen => "`)'",
            Self::Not => "`!'",
            Self::Or => "`v'",
            Self::And => "`^'",
            Self::Eof => "end of input",
        };
        write!(f, "{name}")
    }
}

/// A single token: its kind, the matched lexeme for literals, and the
/// zero-based offset of its first character in the source.
///
/// Tokens are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The matched lexeme. Present for [`TokenKind::Literal`], absent otherwise.
    pub text: Option<String>,
    /// Zero-based offset of the token's first character in the source.
    pub position: usize,
}

impl Token {
    /// Creates a token with no lexeme (operators, parentheses, the sentinel).
    #[must_use]
    pub const fn new(kind: TokenKind, position: usize) -> Self {
        Self {
            kind,
            text: None,
            position,
        }
    }

    /// Creates a literal token carrying its lexeme.
    #[must_use]
    pub fn literal(text: String, position: usize) -> Self {
        Self {
            kind: TokenKind::Literal,
            text: Some(text),
            position,
        }
    }

    /// The literal's name, or the empty string for tokens without a lexeme.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{} `{text}'", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_token_carries_lexeme() {
        let token = Token::literal("p".to_string(), 3);
        assert_eq!(token.kind, TokenKind::Literal);
        assert_eq!(token.lexeme(), "p");
        assert_eq!(token.position, 3);
    }

    #[test]
    fn test_operator_token_has_no_lexeme() {
        let token = Token::new(TokenKind::And, 0);
        assert_eq!(token.text, None);
        assert_eq!(token.lexeme(), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::literal("q".to_string(), 0).to_string(), "literal `q'");
        assert_eq!(Token::new(TokenKind::Eof, 5).to_string(), "end of input");
    }
}
