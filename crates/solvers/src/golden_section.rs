//! Golden-section search for single-variable minimization.
//!
//! # Algorithm
//!
//! Golden-section search finds the minimum of a unimodal function on a
//! bracket `[a, b]`. It keeps two interior points positioned by the golden
//! ratio φ = (1 + √5) / 2,
//!
//! ```text
//! c = b - (b - a) / φ
//! d = a + (b - a) / φ
//! ```
//!
//! and compares `f(c)` with `f(d)`. If `f(d) < f(c)` the bracket shrinks to
//! `[c, b]`, otherwise (ties included) to `[a, d]`. The surviving interior
//! point lands exactly where the next pass needs one of its interior points,
//! so each pass costs a single new evaluation.
//!
//! The search converges once `b - a < tolerance`, checked before each pass,
//! and reports the midpoint of the final bracket.
//!
//! # Trace
//!
//! Each pass appends one [`Record`] holding the bracket and both interior
//! points as they were *before* the reduction.

mod interior;
mod record;


pub use record::Record;

use linemin_core::{Objective, Observer};
use log::{debug, trace};

use crate::{Action, Bracket, Config, Error, Solution, Status, Trace};

use interior::Interior;

/// Finds the minimum of `f` within `bracket` using golden-section search.
///
/// The observer receives every record as it is appended.
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
    let mut interior = Interior::new(f, Bracket::new(bracket)?);
    let mut records = Trace::with_capacity(config.max_iters().min(128));

    for iter in 1..=config.max_iters() {
        if interior.bracket().is_converged(config.tolerance()) {
            return Ok(finish(f, interior.bracket(), Status::Converged, records));
        }

        let record = interior.record(iter);
        trace!("golden section pass {iter}: {record:?}");

        if let Some(Action::StopEarly) = records.emit(record, &mut observer) {
            return Ok(finish(
                f,
                interior.bracket(),
                Status::StoppedByObserver,
                records,
            ));
        }

        interior.shrink(f);
    }

    let status = if interior.bracket().is_converged(config.tolerance()) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(finish(f, interior.bracket(), status, records))
}

/// Finds the minimum without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
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
        "golden section finished ({status:?}) after {} passes: x = {x}, width = {}",
        records.len(),
        bracket.width()
    );
    Solution::new(status, x, f.value(x), records)
}
