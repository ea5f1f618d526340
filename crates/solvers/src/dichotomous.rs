//! Dichotomous search.
//!
//! Each pass evaluates two points straddling the bracket midpoint,
//! `x1 = m - δ` and `x2 = m + δ`, and keeps `[x1, b]` when `f(x2) < f(x1)`,
//! otherwise `[a, x2]`. The bracket roughly halves every pass and approaches
//! a width of `2δ`, which is why `δ` must stay below half the tolerance.

use linemin_core::{Objective, Observer};
use log::{debug, trace};

use crate::{Action, Bracket, ConfigError, Error, Solution, Status, Trace, config};

/// Configuration for dichotomous search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    base: config::Config,
    separation: f64,
}

impl Default for Config {
    fn default() -> Self {
        let base = config::Config::default();
        Self {
            separation: base.tolerance() / 4.0,
            base,
        }
    }
}

impl Config {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is invalid or if `separation` is not
    /// in `(0, tolerance / 2)`.
    pub fn new(tolerance: f64, max_iters: usize, separation: f64) -> Result<Self, ConfigError> {
        let base = config::Config::new(tolerance, max_iters)?;

        if !(separation > 0.0 && separation < tolerance / 2.0) {
            return Err(ConfigError::Separation {
                separation,
                tolerance,
            });
        }

        Ok(Self { base, separation })
    }

    /// Returns the bracket-width tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.base.tolerance()
    }

    /// Returns the maximum number of passes.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.base.max_iters()
    }

    /// Returns the half-distance `δ` between the two interior points.
    #[must_use]
    pub fn separation(&self) -> f64 {
        self.separation
    }
}

/// One dichotomous pass, captured before the reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub iter: usize,
    pub bracket: Bracket,
    pub x1: f64,
    pub x2: f64,
    pub f1: f64,
    pub f2: f64,
}

/// Finds the minimum of `f` within `bracket` using dichotomous search.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if the endpoints are non-finite or not
/// strictly increasing.
pub fn minimize<O, Obs>(
    f: &O,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Record>, Error>
where
    O: Objective + ?Sized,
    Obs: Observer<Record, Action>,
{
    let mut bracket = Bracket::new(bracket)?;
    let delta = config.separation();
    let mut records = Trace::with_capacity(config.max_iters().min(64));

    for iter in 1..=config.max_iters() {
        if bracket.is_converged(config.tolerance()) {
            return Ok(finish(f, bracket, Status::Converged, records));
        }

        let mid = bracket.midpoint();
        let (x1, x2) = (mid - delta, mid + delta);
        let (f1, f2) = (f.value(x1), f.value(x2));

        let record = Record {
            iter,
            bracket,
            x1,
            x2,
            f1,
            f2,
        };
        trace!("dichotomous pass {iter}: {record:?}");

        if let Some(Action::StopEarly) = records.emit(record, &mut observer) {
            return Ok(finish(f, bracket, Status::StoppedByObserver, records));
        }

        bracket = if f2 < f1 {
            Bracket::ordered(x1, bracket.right())
        } else {
            Bracket::ordered(bracket.left(), x2)
        };
    }

    let status = if bracket.is_converged(config.tolerance()) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(finish(f, bracket, status, records))
}

/// Runs dichotomous search without observer support.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if the endpoints are non-finite or not
/// strictly increasing.
pub fn minimize_unobserved<O>(
    f: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<Record>, Error>
where
    O: Objective + ?Sized,
{
    minimize(f, bracket, config, ())
}

fn finish<O: Objective + ?Sized>(
    f: &O,
    bracket: Bracket,
    status: Status,
    records: Trace<Record>,
) -> Solution<Record> {
    let x = bracket.midpoint();
    debug!(
        "dichotomous finished ({status:?}) after {} passes: x = {x}",
        records.len()
    );
    Solution::new(status, x, f.value(x), records)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn parabola(x: f64) -> f64 {
        (x - 2.0).powi(2) + 1.0
    }

    #[test]
    fn default_separation_is_valid() {
        let config = Config::default();
        let checked = Config::new(config.tolerance(), config.max_iters(), config.separation());
        assert_eq!(checked, Ok(config));
    }

    #[test]
    fn rejects_wide_separation() {
        assert_eq!(
            Config::new(1e-3, 50, 5e-4),
            Err(ConfigError::Separation {
                separation: 5e-4,
                tolerance: 1e-3
            })
        );
        assert!(Config::new(1e-3, 50, 0.0).is_err());
        assert!(Config::new(1e-3, 50, f64::NAN).is_err());
        assert!(matches!(
            Config::new(0.0, 50, 1e-4),
            Err(ConfigError::Tolerance(_))
        ));
    }

    #[test]
    fn minimizes_parabola() {
        let config = Config::new(1e-3, 100, 2.5e-4).unwrap();
        let solution = minimize_unobserved(&parabola, [0.0, 5.0], &config).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-3);
        assert!(solution.iters < 20);
    }

    #[test]
    fn keeps_left_part_on_tie() {
        let config = Config::new(1e-3, 1, 1e-4).unwrap();
        let solution = minimize_unobserved(&|x: f64| x.abs(), [-1.0, 1.0], &config).unwrap();

        let first = &solution.trace.records()[0];
        assert_eq!(first.f1, first.f2);
        assert_relative_eq!(solution.x, (-1.0 + 1e-4) / 2.0);
    }

    #[test]
    fn bracket_roughly_halves() {
        let config = Config::new(1e-6, 10, 1e-7).unwrap();
        let solution = minimize_unobserved(&parabola, [0.0, 5.0], &config).unwrap();

        for pair in solution.trace.records().windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let expected = prev.bracket.width() / 2.0 + config.separation();
            assert_relative_eq!(next.bracket.width(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn observer_can_stop_early() {
        let observer = |record: &Record| (record.iter == 4).then_some(Action::StopEarly);
        let solution = minimize(&parabola, [0.0, 5.0], &Config::default(), observer).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 4);
    }
}
