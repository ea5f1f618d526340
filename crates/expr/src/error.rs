use thiserror::Error;

use crate::Func;

/// Errors that can occur when parsing a formula.
///
/// Positions are byte offsets into the original text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("disallowed character {found:?} at position {position}")]
    Disallowed { found: char, position: usize },

    #[error("expression is empty")]
    Empty,

    #[error("invalid number {literal:?} at position {position}")]
    InvalidNumber { literal: String, position: usize },

    #[error("unknown identifier {name:?} at position {position}")]
    UnknownIdentifier { name: String, position: usize },

    #[error("unexpected {found} at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("expression nests too deeply at position {position}")]
    TooDeep { position: usize },

    #[error("{func} expects {expected} argument(s), got {found}")]
    Arity {
        func: Func,
        expected: &'static str,
        found: usize,
    },
}
