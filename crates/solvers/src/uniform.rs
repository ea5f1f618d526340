//! Sequential search on a uniform grid.
//!
//! Each pass evaluates `samples` evenly spaced interior points of the bracket,
//!
//! ```text
//! x_i = a + i · h,  h = (b - a) / (samples + 1),  i = 1..=samples
//! ```
//!
//! picks the first point with the smallest value, and narrows the bracket to
//! the two grid neighbours of that point, `[x_i - h, x_i + h]`. The width
//! shrinks by a factor of `2 / (samples + 1)` per pass.

use linemin_core::{Objective, Observer};
use log::{debug, trace};

use crate::{Action, Bracket, ConfigError, Error, Solution, Status, Trace, config};

/// Configuration for uniform sequential search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    base: config::Config,
    samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: config::Config::default(),
            samples: 10,
        }
    }
}

impl Config {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is invalid or if `samples < 3`.
    pub fn new(tolerance: f64, max_iters: usize, samples: usize) -> Result<Self, ConfigError> {
        let base = config::Config::new(tolerance, max_iters)?;
        if samples < 3 {
            return Err(ConfigError::TooFewSamples(samples));
        }
        Ok(Self { base, samples })
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.base.tolerance()
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.base.max_iters()
    }

    /// Returns the number of interior points evaluated per pass.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }
}

/// One pass of uniform search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Pass number, starting at 1.
    pub iter: usize,

    /// The bracket sampled during this pass.
    pub bracket: Bracket,

    /// Grid point with the smallest value (first one on ties).
    pub x: f64,

    /// Objective value at `x`.
    pub fx: f64,

    /// Grid spacing `h`.
    pub spacing: f64,
}

/// Finds the minimum of `f` within `bracket` by repeated grid sampling.
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
    let mut records = Trace::with_capacity(config.max_iters().min(64));

    for iter in 1..=config.max_iters() {
        if bracket.is_converged(config.tolerance()) {
            return Ok(finish(f, bracket, Status::Converged, records));
        }

        let (x, fx, spacing) = best_sample(f, bracket, config.samples());
        let record = Record {
            iter,
            bracket,
            x,
            fx,
            spacing,
        };
        trace!("uniform pass {iter}: {record:?}");

        if let Some(Action::StopEarly) = records.emit(record, &mut observer) {
            return Ok(finish(f, bracket, Status::StoppedByObserver, records));
        }

        let left = (x - spacing).max(bracket.left());
        let right = (x + spacing).min(bracket.right());
        bracket = Bracket::ordered(left, right);
    }

    let status = if bracket.is_converged(config.tolerance()) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(finish(f, bracket, status, records))
}

/// Runs uniform search without observer support.
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

/// Returns the best interior grid point, its value, and the grid spacing.
fn best_sample<O: Objective + ?Sized>(f: &O, bracket: Bracket, samples: usize) -> (f64, f64, f64) {
    #[allow(clippy::cast_precision_loss)]
    let spacing = bracket.width() / (samples + 1) as f64;

    let mut best = (f64::NAN, f64::INFINITY);
    for i in 1..=samples {
        #[allow(clippy::cast_precision_loss)]
        let x = bracket.left() + i as f64 * spacing;
        let fx = f.value(x);
        if fx < best.1 || best.0.is_nan() {
            best = (x, fx);
        }
    }

    (best.0, best.1, spacing)
}

fn finish<O: Objective + ?Sized>(
    f: &O,
    bracket: Bracket,
    status: Status,
    records: Trace<Record>,
) -> Solution<Record> {
    let x = bracket.midpoint();
    debug!(
        "uniform search finished ({status:?}) after {} passes: x = {x}",
        records.len()
    );
    Solution::new(status, x, f.value(x), records)
}
