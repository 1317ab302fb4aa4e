//! Recursive-descent parser for propositional formulas.
//!
//! The grammar has three precedence tiers, lowest binding first:
//!
//! ```text
//! expression := term ('v' term)*            left-associative
//! term       := factor ('^' factor)*        left-associative
//! factor     := '!'? ( '(' expression ')' | LITERAL )
//! ```
//!
//! OR binds more loosely than AND; `!` binds to the immediately following
//! factor and becomes the `negated` flag on that factor's node rather than a
//! node of its own. A parenthesized expression is kept as a [`Expr::Group`]
//! node so its negation stays independent of anything inside it.
//!
//! Parse failures are unrecoverable: no partial tree is returned and no
//! resynchronization is attempted. The end-of-input sentinel participates in
//! lookahead like any other token kind and is never consumed.

use crate::logic::expr::{Expr, Operator};
use crate::logic::scanner::{LexError, TokenStream, scan};
use crate::logic::token::{Token, TokenKind};
use log::debug;
use std::error::Error;
use std::fmt;

/// The token stream did not match the grammar at the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The token kind the grammar required here.
    pub expected: TokenKind,
    /// The token actually found.
    pub found: Token,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} but found {} at offset {}",
            self.expected, self.found, self.found.position
        )
    }
}

impl Error for ParseError {}

/// Either of the two failure kinds at the text-to-tree boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// The scanner hit an unrecognizable character.
    Lex(LexError),
    /// The parser hit a token the grammar does not allow here.
    Parse(ParseError),
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl Error for FormulaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for FormulaError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for FormulaError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

/// Scans and parses `source` into an expression tree.
///
/// # Errors
///
/// Returns [`FormulaError::Lex`] when the scanner rejects a character, or
/// [`FormulaError::Parse`] when the token stream does not match the grammar.
/// Both are fatal to the parse attempt; no partial tree is produced.
pub fn parse(source: &str) -> Result<Expr, FormulaError> {
    let tokens = scan(source)?;
    let expr = Parser::new(tokens).expression()?;
    debug!("parsed `{expr}'");
    Ok(expr)
}

/// Recursive-descent state over a scanned token stream.
struct Parser {
    tokens: TokenStream,
    current: usize,
}

impl Parser {
    fn new(tokens: TokenStream) -> Self {
        Self { tokens, current: 0 }
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;

        while self.matches(TokenKind::Or) {
            let rhs = self.term()?;
            expr = Expr::binary(expr, Operator::Or, rhs);
        }

        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;

        while self.matches(TokenKind::And) {
            let rhs = self.factor()?;
            expr = Expr::binary(expr, Operator::And, rhs);
        }

        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let negated = self.matches(TokenKind::Not);

        if self.matches(TokenKind::LeftParen) {
            let inner = self.expression()?;
            self.consume(TokenKind::RightParen)?;
            Ok(Expr::group(inner, negated))
        } else {
            let token = self.consume(TokenKind::Literal)?;
            let name = token.lexeme().to_string();
            Ok(Expr::Literal { name, negated })
        }
    }

    /// Consumes the current token if it has the given kind.
    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Consumes and returns the current token, or fails if its kind differs.
    fn consume(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.current += 1;
            Ok(self.tokens[self.current - 1].clone())
        } else {
            Err(ParseError {
                expected: kind,
                found: self.actual().clone(),
            })
        }
    }

    /// Whether the current token has the given kind. The sentinel never
    /// matches, so the parser cannot advance past end of input.
    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.actual().kind == kind
    }

    fn is_at_end(&self) -> bool {
        self.actual().kind == TokenKind::Eof
    }

    fn actual(&self) -> &Token {
        &self.tokens[self.current]
    }
}
