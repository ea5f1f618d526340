use thiserror::Error;

use crate::{BracketError, ConfigError};

/// Precondition violations detected before a search starts.
///
/// A search that returns an error has not produced a partial result.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("derivative does not change sign: f'({left})={df_left}, f'({right})={df_right}")]
    NoSignChange {
        left: f64,
        right: f64,
        df_left: f64,
        df_right: f64,
    },

    #[error("start point must be finite, got {0}")]
    NonFiniteStart(f64),
}
