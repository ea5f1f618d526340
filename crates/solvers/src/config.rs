use thiserror::Error;

/// Errors that can occur when validating a search configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("fibonacci search needs n >= 2, got {0}")]
    TooFewIterations(usize),

    #[error("separation must lie in (0, tolerance / 2), got {separation} for tolerance {tolerance}")]
    Separation { separation: f64, tolerance: f64 },

    #[error("uniform search needs at least 3 samples per pass, got {0}")]
    TooFewSamples(usize),
}

/// Tolerance and iteration budget shared by most methods.
///
/// What the tolerance bounds depends on the method: the bracket width for
/// bracket methods, `|f'(x)|` for Newton, and either for bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-5,
            max_iters: 100,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-finite or not positive.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            tolerance: check_tolerance(tolerance)?,
            max_iters,
        })
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of passes.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}

pub(crate) fn check_tolerance(tolerance: f64) -> Result<f64, ConfigError> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(tolerance)
    } else {
        Err(ConfigError::Tolerance(tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_tolerance() {
        let config = Config::new(1e-3, 60).expect("valid config");
        assert_eq!(config.tolerance(), 1e-3);
        assert_eq!(config.max_iters(), 60);
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(0.0, 10), Err(ConfigError::Tolerance(0.0)));
        assert_eq!(Config::new(-1.0, 10), Err(ConfigError::Tolerance(-1.0)));
        assert!(Config::new(f64::NAN, 10).is_err());
        assert!(Config::new(f64::INFINITY, 10).is_err());
    }
}
