//! The formula scanner (lexer).
//!
//! Converts a raw source string into an ordered sequence of tokens in a
//! single left-to-right pass, skipping whitespace and failing fast on the
//! first unrecognized character. Each call to [`scan`] starts from fresh
//! state; nothing persists across calls.
//!
//! A [`LexError`] carries everything needed for a positional diagnostic: the
//! offending character, its offset, the source line it appears on, and the
//! tokens successfully produced before the failure. Rendering the error
//! produces the full caret-style report; the decision to abort is left to
//! the caller rather than taken here, so the scanner stays embeddable.

use crate::logic::token::{Token, TokenKind};
use log::trace;
use smallvec::SmallVec;
use std::error::Error;
use std::fmt;

/// The token buffer type. Formulas are typically short, so the tokens of
/// most inputs fit inline without a heap allocation.
pub type TokenStream = SmallVec<[Token; 16]>;

/// An unrecognized character was encountered while scanning.
///
/// The `Display` impl renders a full diagnostic: the character, its 1-based
/// column, the source line with a caret under the column, and the numbered
/// list of tokens produced before the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// The character that could not be scanned.
    pub character: char,
    /// Zero-based offset of the character in the source.
    pub position: usize,
    source: String,
    tokens: Vec<Token>,
}

impl LexError {
    /// The tokens successfully produced before the failure, in order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The 1-based column of the offending character within its line.
    #[must_use]
    pub fn column(&self) -> usize {
        self.position - self.line_start() + 1
    }

    /// The full source line containing the offending character.
    #[must_use]
    pub fn line(&self) -> String {
        self.source
            .chars()
            .skip(self.line_start())
            .take_while(|&c| c != '\n')
            .collect()
    }

    /// Offset (in characters) of the start of the line containing the error.
    fn line_start(&self) -> usize {
        self.source
            .chars()
            .take(self.position)
            .enumerate()
            .filter(|&(_, c)| c == '\n')
            .last()
            .map_or(0, |(i, _)| i + 1)
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = self.column();
        writeln!(
            f,
            "Unrecognized character `{}' at column {column}",
            self.character
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.line())?;
        writeln!(f, "{}^", " ".repeat(column - 1))?;
        writeln!(f)?;
        writeln!(f, "Tokens scanned so far:")?;
        for (i, token) in self.tokens.iter().enumerate() {
            writeln!(f, "{} - {token}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for LexError {}

/// Scans `source` into a token stream terminated by a single
/// [`TokenKind::Eof`] sentinel positioned where scanning stopped.
///
/// Whitespace (space, tab, newline) is skipped and produces no token. The
/// characters `(`, `)`, `!`, `v` and `^` map directly to their token kinds;
/// `v` always scans as OR, even when followed by further letters, so
/// identifiers cannot start with `v`. Any other alphabetic or underscore
/// character starts a literal whose lexeme is the maximal run of
/// alphanumeric-or-underscore characters.
///
/// # Errors
///
/// Returns a [`LexError`] on the first character that is none of the above.
pub fn scan(source: &str) -> Result<TokenStream, LexError> {
    Scanner::new(source).run()
}

/// Single-pass scanner state. Built fresh for every [`scan`] call.
struct Scanner {
    chars: Vec<char>,
    source: String,
    tokens: TokenStream,
    start: usize,
    current: usize,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            source: source.to_string(),
            tokens: TokenStream::new(),
            start: 0,
            current: 0,
        }
    }

    fn run(mut self) -> Result<TokenStream, LexError> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        self.tokens.push(Token::new(TokenKind::Eof, self.current));
        trace!("scanned {} tokens", self.tokens.len());

        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), LexError> {
        let c = self.advance();
        match c {
            ' ' | '\t' | '\n' => Ok(()),
            '(' => Ok(self.add_token(TokenKind::LeftParen)),
            ')' => Ok(self.add_token(TokenKind::RightParen)),
            '!' => Ok(self.add_token(TokenKind::Not)),
            'v' => Ok(self.add_token(TokenKind::Or)),
            '^' => Ok(self.add_token(TokenKind::And)),
            c if is_alpha(c) => Ok(self.literal()),
            c => Err(self.error(c)),
        }
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.tokens.push(Token::new(kind, self.start));
    }

    fn literal(&mut self) {
        while self.peek().is_some_and(is_alpha_numeric) {
            self.current += 1;
        }
        let text: String = self.chars[self.start..self.current].iter().collect();
        self.tokens.push(Token::literal(text, self.start));
    }

    fn error(&self, character: char) -> LexError {
        LexError {
            character,
            position: self.start,
            source: self.source.clone(),
            tokens: self.tokens.to_vec(),
        }
    }
}

const fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
