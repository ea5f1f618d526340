//! Fibonacci search.
//!
//! Like golden-section search, Fibonacci search shrinks a bracket by
//! comparing the objective at two interior points, but the points are placed
//! using ratios of consecutive Fibonacci numbers. For a sequence
//! `fib[0] = fib[1] = 1` and a pass index `k` running from `n` down to `2`:
//!
//! ```text
//! c = a + fib[k-2] / fib[k] · (b - a)
//! d = a + fib[k-1] / fib[k] · (b - a)
//! ```
//!
//! The search always runs exactly `n - 1` passes, so its final bracket width
//! is `(b - a) / fib[n]` regardless of the objective. On the last pass
//! (`k = 2`) both interior points coincide at the midpoint and the tie keeps
//! the left half.
//!
//! A config sized by [`Config::for_tolerance`] remembers whether `n` had to
//! be capped below what the tolerance asks for; such a run ends with
//! [`Status::MaxIters`] instead of [`Status::Converged`].

use linemin_core::{Objective, Observer};
use log::{debug, trace};

use crate::{Action, Bracket, ConfigError, Error, Solution, Status, Trace, config};

/// Returns the Fibonacci numbers `fib[0..=n]` with `fib[0] = fib[1] = 1`.
#[must_use]
pub fn sequence(n: usize) -> Vec<f64> {
    let mut fib = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let next = if i < 2 { 1.0 } else { fib[i - 1] + fib[i - 2] };
        fib.push(next);
    }
    fib
}

/// Configuration for Fibonacci search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    n: usize,
    capped: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n: 20,
            capped: false,
        }
    }
}

impl Config {
    /// Creates a config that runs `n - 1` passes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewIterations`] if `n < 2`.
    pub fn new(n: usize) -> Result<Self, ConfigError> {
        if n < 2 {
            return Err(ConfigError::TooFewIterations(n));
        }
        Ok(Self { n, capped: false })
    }

    /// Picks the smallest `n` whose final bracket is narrower than `tolerance`.
    ///
    /// That is the smallest `n ≥ 2` with `fib[n] ≥ width / tolerance`,
    /// capped at `max_n`. When the cap binds, the final bracket is still wider
    /// than `tolerance` and [`Config::is_capped`] returns `true`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is non-finite or not positive, or if
    /// `max_n < 2`.
    pub fn for_tolerance(width: f64, tolerance: f64, max_n: usize) -> Result<Self, ConfigError> {
        let tolerance = config::check_tolerance(tolerance)?;
        if max_n < 2 {
            return Err(ConfigError::TooFewIterations(max_n));
        }

        let ratio = width / tolerance;
        let (mut n, mut prev, mut current) = (2, 1.0, 2.0);
        while n < max_n && current < ratio {
            (prev, current) = (current, prev + current);
            n += 1;
        }

        Ok(Self {
            n,
            capped: current < ratio,
        })
    }

    /// Returns the Fibonacci index the search starts from.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the number of passes the search performs.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.n - 1
    }

    /// Returns `true` if `n` was capped short of the requested tolerance.
    #[must_use]
    pub fn is_capped(&self) -> bool {
        self.capped
    }
}

/// One pass of Fibonacci search, captured before the reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Pass number, starting at 1.
    pub iter: usize,

    /// Fibonacci index used to place the interior points.
    pub k: usize,

    /// The bracket `[a, b]` at the start of the pass.
    pub bracket: Bracket,

    pub c: f64,
    pub d: f64,
    pub fc: f64,
    pub fd: f64,
}

/// Finds the minimum of `f` within `bracket` using Fibonacci search.
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
    let n = config.n();
    let fib = sequence(n);

    let place = |bracket: Bracket, k: usize, i: usize| {
        bracket.left() + fib[i] / fib[k] * bracket.width()
    };

    let mut c = place(bracket, n, n - 2);
    let mut d = place(bracket, n, n - 1);
    let (mut fc, mut fd) = (f.value(c), f.value(d));
    let mut records = Trace::with_capacity(config.passes());

    for k in (2..=n).rev() {
        let record = Record {
            iter: n - k + 1,
            k,
            bracket,
            c,
            d,
            fc,
            fd,
        };
        trace!("fibonacci pass {}: {record:?}", record.iter);

        if let Some(Action::StopEarly) = records.emit(record, &mut observer) {
            return Ok(finish(f, bracket, Status::StoppedByObserver, records));
        }

        if fd < fc {
            bracket = Bracket::ordered(c, bracket.right());
            (c, fc) = (d, fd);
            if k > 2 {
                d = place(bracket, k - 1, k - 2);
                fd = f.value(d);
            }
        } else {
            bracket = Bracket::ordered(bracket.left(), d);
            (d, fd) = (c, fc);
            if k > 2 {
                c = place(bracket, k - 1, k - 3);
                fc = f.value(c);
            }
        }
    }

    let status = if config.is_capped() {
        Status::MaxIters
    } else {
        Status::Converged
    };
    Ok(finish(f, bracket, status, records))
}

/// Runs Fibonacci search without observer support.
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
        "fibonacci finished ({status:?}) after {} passes: x = {x}, width = {}",
        records.len(),
        bracket.width()
    );
    Solution::new(status, x, f.value(x), records)
}
