use thiserror::Error;

use linemin_solvers::ConfigError;

use crate::Method;

/// Errors returned by the `linemin` entry points.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The formula could not be parsed.
    #[error("invalid expression: {0}")]
    InvalidExpression(#[from] linemin_expr::Error),

    /// The search inputs violate a method precondition.
    #[error("precondition violated: {0}")]
    Precondition(#[from] linemin_solvers::Error),

    #[error("unknown method {0:?}")]
    UnknownMethod(String),

    /// The method was given a point where it needs a bracket, or vice versa.
    #[error("{method} search needs a {expected} start")]
    StartMismatch {
        method: Method,
        expected: &'static str,
    },
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        Self::Precondition(error.into())
    }
}
