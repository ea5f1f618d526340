use std::{fmt, str::FromStr};

use linemin_solvers::{Config, ConfigError};

use crate::Error;

/// The search methods a front-end can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    Golden,
    Fibonacci,
    Bisection,
    Newton,
    Dichotomous,
    Sequential,
}

impl Method {
    /// Every method, in display order.
    pub const ALL: [Method; 6] = [
        Method::Golden,
        Method::Fibonacci,
        Method::Bisection,
        Method::Newton,
        Method::Dichotomous,
        Method::Sequential,
    ];

    /// Returns the name accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Golden => "golden",
            Self::Fibonacci => "fibonacci",
            Self::Bisection => "bisection",
            Self::Newton => "newton",
            Self::Dichotomous => "dichotomous",
            Self::Sequential => "sequential",
        }
    }

    /// Returns true if the method starts from a point rather than a bracket.
    #[must_use]
    pub fn needs_point(self) -> bool {
        matches!(self, Self::Newton)
    }

    /// Returns true if the method uses derivatives of the objective.
    #[must_use]
    pub fn uses_derivatives(self) -> bool {
        matches!(self, Self::Bisection | Self::Newton)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownMethod(name.to_owned()))
    }
}

/// Where a search starts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Start {
    /// An interval `[a, b]` with `a < b`, for bracket methods.
    Bracket([f64; 2]),

    /// A single point, for Newton's method.
    Point(f64),
}

/// Tolerance and iteration budget shared by every method.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    tolerance: f64,
    max_iters: usize,
}

impl Default for Settings {
    fn default() -> Self {
        let config = Config::default();
        Self {
            tolerance: config.tolerance(),
            max_iters: config.max_iters(),
        }
    }
}

impl Settings {
    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if the tolerance is non-finite or not
    /// positive.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        let config = Config::new(tolerance, max_iters)?;
        Ok(Self {
            tolerance: config.tolerance(),
            max_iters: config.max_iters(),
        })
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    pub(crate) fn config(&self) -> Result<Config, ConfigError> {
        Config::new(self.tolerance, self.max_iters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        for method in Method::ALL {
            assert_eq!(method.name().parse::<Method>(), Ok(method));
        }
        assert_eq!("  Newton ".parse::<Method>(), Ok(Method::Newton));
        assert_eq!(
            "simplex".parse::<Method>(),
            Err(Error::UnknownMethod("simplex".into()))
        );
    }

    #[test]
    fn only_newton_starts_from_a_point() {
        let point_methods: Vec<_> = Method::ALL.into_iter().filter(|m| m.needs_point()).collect();
        assert_eq!(point_methods, vec![Method::Newton]);
    }

    #[test]
    fn settings_default_and_validation() {
        let settings = Settings::default();
        assert_eq!(settings.tolerance(), 1e-5);
        assert_eq!(settings.max_iters(), 100);

        assert_eq!(Settings::new(-1.0, 10), Err(ConfigError::Tolerance(-1.0)));
    }
}
