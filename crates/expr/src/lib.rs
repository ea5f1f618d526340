//! Restricted single-variable formulas.
//!
//! Turns user-supplied text such as `"x^2 - 4*x + 3"` into an [`Expression`]
//! that can be evaluated at any `x`. The grammar is deliberately small:
//!
//! - the variable `x` and decimal literals (`2`, `0.5`, `.5`, `3.`)
//! - binary `+ - * /` and right-associative `^`
//! - unary `+` and `-` (binding looser than `^`, so `-x^2 = -(x^2)`)
//! - parentheses and comma-separated function arguments
//! - the functions `sin cos tan log exp sqrt abs pow min max`
//!
//! Parsing happens in two stages. A coarse character filter rejects any text
//! outside the allowed alphabet, then a recursive-descent parser builds an
//! [`Expr`] tree. The tree is evaluated directly; no code is ever generated
//! from user input.
//!
//! ```
//! use linemin_expr::Expression;
//!
//! let f: Expression = "x^2 - 4*x + 3".parse().unwrap();
//! assert_eq!(f.eval(1.0), 0.0);
//! assert!("bad$chars".parse::<Expression>().is_err());
//! ```

mod ast;
mod error;
mod filter;
mod func;
mod lexer;
mod parser;

pub use ast::{BinaryOp, Expr};
pub use error::Error;
pub use func::Func;
pub use parser::MAX_DEPTH;

use std::{fmt, str::FromStr};

use linemin_core::Objective;

/// A parsed formula in the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Expr,
}

impl Expression {
    /// Parses and validates a formula.
    ///
    /// Evaluation is total over `f64` (domain errors produce NaN or infinities
    /// rather than failures), so a tree that parses is never rejected for its
    /// values.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the text contains disallowed characters, does
    /// not conform to the grammar, or nests deeper than [`MAX_DEPTH`].
    pub fn parse(source: &str) -> Result<Self, Error> {
        filter::check(source)?;
        let tokens = lexer::tokenize(source)?;
        let root = parser::parse(&tokens)?;

        Ok(Self {
            source: source.to_owned(),
            root,
        })
    }

    /// Evaluates the formula at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.root.eval(x)
    }

    /// Returns the original formula text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the parsed expression tree.
    #[must_use]
    pub fn root(&self) -> &Expr {
        &self.root
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Objective for Expression {
    fn value(&self, x: f64) -> f64 {
        self.eval(x)
    }
}
