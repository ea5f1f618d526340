//! Newton's method on the derivative.
//!
//! Iterates `x ← x - f'(x) / f''(x)` from a start point until `|f'(x)| < tol`.
//! The method seeks stationary points, so started near a maximum it will
//! happily converge there.
//!
//! When `|f''(x)|` falls below [`STALL_THRESHOLD`] (or is not finite) the step
//! is undefined; the run stops with [`Status::Stalled`] and reports the last
//! computed iterate as is.

use linemin_core::{Objective, Observer};
use log::{debug, trace};

use crate::{Action, Config, Error, Solution, Status, Trace};

/// Second-derivative magnitude below which a Newton step is not taken.
pub const STALL_THRESHOLD: f64 = 1e-12;

/// One Newton pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Pass number, starting at 1.
    pub iter: usize,

    /// The iterate at the start of the pass.
    pub x: f64,

    pub fx: f64,
    pub dfx: f64,
    pub d2fx: f64,

    /// The step `f'(x) / f''(x)` subtracted from `x`.
    ///
    /// `None` on a terminal pass, where no step is taken.
    pub step: Option<f64>,
}

/// Searches for a stationary point of `f` with Newton's method from `x0`.
///
/// # Errors
///
/// Returns [`Error::NonFiniteStart`] if `x0` is not finite.
pub fn minimize<O, D, D2, Obs>(
    f: &O,
    df: &D,
    d2f: &D2,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Record>, Error>
where
    O: Objective + ?Sized,
    D: Objective + ?Sized,
    D2: Objective + ?Sized,
    Obs: Observer<Record, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteStart(x0));
    }

    let tolerance = config.tolerance();
    let mut x = x0;
    let mut records = Trace::with_capacity(config.max_iters().min(64));

    for iter in 1..=config.max_iters() {
        let fx = f.value(x);
        let dfx = df.value(x);
        let d2fx = d2f.value(x);

        let terminal = if dfx.abs() < tolerance {
            Some(Status::Converged)
        } else if d2fx.abs() < STALL_THRESHOLD || !d2fx.is_finite() {
            Some(Status::Stalled)
        } else {
            None
        };

        let step = terminal.is_none().then(|| dfx / d2fx);
        let record = Record {
            iter,
            x,
            fx,
            dfx,
            d2fx,
            step,
        };
        trace!("newton pass {iter}: {record:?}");

        let action = records.emit(record, &mut observer);

        if let Some(status) = terminal {
            return Ok(finish(x, fx, status, records));
        }

        if let Some(Action::StopEarly) = action {
            return Ok(finish(x, fx, Status::StoppedByObserver, records));
        }

        if let Some(step) = step {
            x -= step;
        }
    }

    Ok(finish(x, f.value(x), Status::MaxIters, records))
}

/// Runs Newton's method without observer support.
///
/// # Errors
///
/// Returns [`Error::NonFiniteStart`] if `x0` is not finite.
pub fn minimize_unobserved<O, D, D2>(
    f: &O,
    df: &D,
    d2f: &D2,
    x0: f64,
    config: &Config,
) -> Result<Solution<Record>, Error>
where
    O: Objective + ?Sized,
    D: Objective + ?Sized,
    D2: Objective + ?Sized,
{
    minimize(f, df, d2f, x0, config, ())
}

fn finish(x: f64, fx: f64, status: Status, records: Trace<Record>) -> Solution<Record> {
    match status {
        Status::Stalled => debug!(
            "newton stalled at x = {x} after {} passes: second derivative vanished",
            records.len()
        ),
        _ => debug!(
            "newton finished ({status:?}) after {} passes: x = {x}",
            records.len()
        ),
    }
    Solution::new(status, x, fx, records)
}
