//! Parser state and entry point.
//!
//! The parser holds the token stream and a cursor into it; the token at
//! the cursor is the single lookahead the grammar rules dispatch on.
//! Consuming the lookahead moves the cursor forward one token, so exactly
//! one unconsumed token is visible at any time.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::grammar::parse_program;

/// The parsing context passed to every grammar rule.
///
/// This is the only mutable state in the recognizer. The token vector is
/// never modified; only the cursor advances.
pub struct Parser {
    /// The list of tokens to check, ending in an EOF sentinel
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    /// Creates a new Parser over a token stream produced by `tokenize`.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the lookahead token without consuming it.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap()
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.get(self.pos).unwrap().kind
    }

    /// Consumes the lookahead and returns it.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        self.tokens.get(self.pos - 1).unwrap()
    }

    /// Consumes the lookahead if it has the given kind.
    ///
    /// Returns whether a token was consumed. Used for the optional parts
    /// of the grammar, where a mismatch is not an error.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current_token_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Requires the lookahead to have the given kind and consumes it.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The required TokenKind
    /// * `error` - The error to report if the lookahead does not match
    ///
    /// # Returns
    ///
    /// The consumed token, or the given error positioned at the lookahead.
    pub fn expect(&mut self, expected_kind: TokenKind, error: ErrorImpl) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            Ok(self.advance().clone())
        } else {
            Err(Error::new(error, self.get_position()))
        }
    }

    /// Returns the source position of the lookahead token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Checks a token stream against the grammar.
///
/// This is the main entry point for recognition. No tree or other
/// artifact is produced: `Ok(())` means the stream begins with a valid
/// program, and the first unmet grammar expectation is returned as an
/// error with no recovery attempted.
pub fn parse(tokens: Vec<Token>) -> Result<(), Error> {
    let mut parser = Parser::new(tokens);
    parse_program(&mut parser)
}
