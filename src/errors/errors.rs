use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A syntax error: the kind of expectation that went unmet, plus the
/// position of the lookahead token that failed to meet it.
///
/// The first error wins; grammar rules propagate it upward untouched and
/// no rule ever recovers, so one of these is the only failure the whole
/// run can produce.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("expected {construct}")]
    Expected { construct: &'static str },
    #[error("missing {construct}")]
    Missing { construct: &'static str },
    #[error("unknown statement")]
    UnknownStatement { token: String },
}
