//! Lexical analysis module for the validator.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for the grammar recognizer. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking
//! - Comments and whitespace handling
//!
//! Tokenization never fails: characters that match no pattern are
//! silently discarded rather than reported.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
