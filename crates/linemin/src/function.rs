use std::fmt;

use linemin_core::{NumericDerivative, NumericSecondDerivative, Objective};
use linemin_expr::Expression;
use log::debug;

use crate::{Catalog, Error};

/// An objective to minimize: a catalog entry or a parsed custom formula.
#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    Catalog(Catalog),
    Custom(Expression),
}

impl Function {
    /// Returns the formula text.
    #[must_use]
    pub fn formula(&self) -> &str {
        match self {
            Self::Catalog(entry) => entry.formula(),
            Self::Custom(expression) => expression.source(),
        }
    }

    /// Returns the catalog entry, if this is one.
    #[must_use]
    pub fn catalog(&self) -> Option<Catalog> {
        match self {
            Self::Catalog(entry) => Some(*entry),
            Self::Custom(_) => None,
        }
    }
}

impl Objective for Function {
    fn value(&self, x: f64) -> f64 {
        match self {
            Self::Catalog(entry) => entry.value(x),
            Self::Custom(expression) => expression.eval(x),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formula())
    }
}

impl From<Catalog> for Function {
    fn from(entry: Catalog) -> Self {
        Self::Catalog(entry)
    }
}

impl From<Expression> for Function {
    fn from(expression: Expression) -> Self {
        Self::Custom(expression)
    }
}

/// Builds an objective from a catalog key or a custom formula.
///
/// Catalog keys are matched first (ignoring ASCII case and surrounding
/// whitespace); anything else is parsed as a formula in `x`.
///
/// # Errors
///
/// Returns [`Error::InvalidExpression`] if the text is not a catalog key and
/// does not parse.
pub fn build_function(formula_or_key: &str) -> Result<Function, Error> {
    if let Some(entry) = Catalog::from_key(formula_or_key.trim()) {
        return Ok(Function::Catalog(entry));
    }

    let expression = Expression::parse(formula_or_key)?;
    debug!("parsed custom objective {expression}");
    Ok(Function::Custom(expression))
}

/// The first derivative of a [`Function`].
#[derive(Debug, Clone, Copy)]
pub enum Derivative<'a> {
    /// Closed form from the catalog.
    Exact(Catalog),

    /// Central-difference estimate.
    Numeric(NumericDerivative<'a, Expression>),
}

/// The second derivative of a [`Function`].
#[derive(Debug, Clone, Copy)]
pub enum SecondDerivative<'a> {
    /// Closed form from the catalog.
    Exact(Catalog),

    /// Central-difference estimate.
    Numeric(NumericSecondDerivative<'a, Expression>),
}

impl Objective for Derivative<'_> {
    fn value(&self, x: f64) -> f64 {
        match self {
            Self::Exact(entry) => entry.derivative(x),
            Self::Numeric(df) => df.value(x),
        }
    }
}

impl Objective for SecondDerivative<'_> {
    fn value(&self, x: f64) -> f64 {
        match self {
            Self::Exact(entry) => entry.second_derivative(x),
            Self::Numeric(d2f) => d2f.value(x),
        }
    }
}

/// Returns the first and second derivatives of `f`.
///
/// Catalog entries use their closed forms; custom formulas fall back to
/// central differences with step [`derivative::STEP`].
///
/// [`derivative::STEP`]: linemin_core::derivative::STEP
#[must_use]
pub fn build_derivatives(f: &Function) -> (Derivative<'_>, SecondDerivative<'_>) {
    match f {
        Function::Catalog(entry) => (Derivative::Exact(*entry), SecondDerivative::Exact(*entry)),
        Function::Custom(expression) => (
            Derivative::Numeric(NumericDerivative::new(expression)),
            SecondDerivative::Numeric(NumericSecondDerivative::new(expression)),
        ),
    }
}
