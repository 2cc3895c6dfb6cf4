//! Grammar recognizer for the validator.
//!
//! This module contains the recursive-descent parser that checks a token
//! stream against the language grammar. Each grammar rule is a function
//! dispatching on a single token of lookahead; there is no backtracking
//! and no tree is built. Recognition either consumes a valid prefix of
//! the stream or stops at the first unmet expectation, which propagates
//! up to the caller as an error value.

pub mod grammar;
pub mod parser;
