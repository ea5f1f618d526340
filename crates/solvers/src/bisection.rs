//! Bisection on the derivative.
//!
//! Finds a stationary point of `f` by bisecting a bracket on which the
//! derivative `f'` changes sign. Each pass evaluates `f'` at the midpoint
//! `c = (a + b) / 2` and keeps whichever half still brackets the sign change:
//! `[a, c]` when `f'(a) · f'(c) < 0`, otherwise `[c, b]`.
//!
//! Only derivative signs drive the search; objective values are recorded for
//! display but never compared. The search converges when `|f'(c)| < tol`
//! (returning `c`) or when the bracket width drops below `tol` (returning the
//! bracket midpoint).

use linemin_core::{Objective, Observer};
use log::{debug, trace};

use crate::{Action, Bracket, Config, Error, Solution, Status, Trace};

/// One pass of bisection, captured before the bracket is halved.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Pass number, starting at 1.
    pub iter: usize,

    /// The bracket `[a, b]` at the start of the pass.
    pub bracket: Bracket,

    /// Midpoint of the bracket.
    pub c: f64,

    /// Objective value at `c`.
    pub fc: f64,

    /// Derivative value at `c`.
    pub dfc: f64,
}

/// Finds a stationary point of `f` within `bracket` by bisecting on `df`.
///
/// An endpoint where `|f'| < tol` is itself the answer: the search returns it
/// as converged without any pass.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or if `f'(a) · f'(b) > 0`.
pub fn minimize<O, D, Obs>(
    f: &O,
    df: &D,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<Record>, Error>
where
    O: Objective + ?Sized,
    D: Objective + ?Sized,
    Obs: Observer<Record, Action>,
{
    let mut bracket = Bracket::new(bracket)?;

    let mut df_left = df.value(bracket.left());
    let df_right = df.value(bracket.right());
    if df_left * df_right > 0.0 {
        return Err(Error::NoSignChange {
            left: bracket.left(),
            right: bracket.right(),
            df_left,
            df_right,
        });
    }

    let tolerance = config.tolerance();
    let mut records = Trace::with_capacity(config.max_iters().min(128));

    // A stationary endpoint carries no sign to bisect on.
    if df_left.abs() < tolerance {
        return Ok(finish(f, bracket.left(), Status::Converged, records));
    }
    if df_right.abs() < tolerance {
        return Ok(finish(f, bracket.right(), Status::Converged, records));
    }

    for iter in 1..=config.max_iters() {
        if bracket.is_converged(tolerance) {
            return Ok(finish(f, bracket.midpoint(), Status::Converged, records));
        }

        let c = bracket.midpoint();
        let dfc = df.value(c);
        let record = Record {
            iter,
            bracket,
            c,
            fc: f.value(c),
            dfc,
        };
        trace!("bisection pass {iter}: {record:?}");

        let action = records.emit(record, &mut observer);

        if dfc.abs() < tolerance {
            return Ok(finish(f, c, Status::Converged, records));
        }

        if let Some(Action::StopEarly) = action {
            return Ok(finish(f, c, Status::StoppedByObserver, records));
        }

        if df_left * dfc < 0.0 {
            bracket = Bracket::ordered(bracket.left(), c);
        } else {
            bracket = Bracket::ordered(c, bracket.right());
            df_left = dfc;
        }
    }

    let status = if bracket.is_converged(tolerance) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(finish(f, bracket.midpoint(), status, records))
}

/// Runs bisection without observer support.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or if `f'(a) · f'(b) > 0`.
pub fn minimize_unobserved<O, D>(
    f: &O,
    df: &D,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<Record>, Error>
where
    O: Objective + ?Sized,
    D: Objective + ?Sized,
{
    minimize(f, df, bracket, config, ())
}

fn finish<O: Objective + ?Sized>(
    f: &O,
    x: f64,
    status: Status,
    records: Trace<Record>,
) -> Solution<Record> {
    debug!(
        "bisection finished ({status:?}) after {} passes: x = {x}",
        records.len()
    );
    Solution::new(status, x, f.value(x), records)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// f(x) = x² - 4x + 3, stationary point at x = 2.
    fn quadratic(x: f64) -> f64 {
        x * x - 4.0 * x + 3.0
    }

    fn quadratic_df(x: f64) -> f64 {
        2.0 * x - 4.0
    }

    #[test]
    fn finds_stationary_point() {
        let solution =
            minimize_unobserved(&quadratic, &quadratic_df, [-2.0, 5.0], &Config::default())
                .unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-5);
        assert_relative_eq!(solution.fx, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn halves_bracket_toward_sign_change() {
        let config = Config::new(1e-9, 2).unwrap();
        let solution = minimize_unobserved(&quadratic, &quadratic_df, [-2.0, 5.0], &config).unwrap();

        let records = solution.trace.records();
        assert_eq!(records.len(), 2);

        // c = 1.5, f'(c) = -1 has the same sign as f'(-2), so keep [1.5, 5].
        assert_eq!(records[0].c, 1.5);
        assert_eq!(records[0].dfc, -1.0);
        assert_eq!(records[1].bracket.as_array(), [1.5, 5.0]);

        // c = 3.25, f'(c) = 2.5 changes sign, so keep [1.5, 3.25].
        assert_eq!(records[1].c, 3.25);
        assert_eq!(solution.status, Status::MaxIters);
        assert_relative_eq!(solution.x, (1.5 + 3.25) / 2.0);
    }

    #[test]
    fn converges_on_exact_midpoint() {
        // The first midpoint is the stationary point itself.
        let solution =
            minimize_unobserved(&quadratic, &quadratic_df, [0.0, 4.0], &Config::default())
                .unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.x, 2.0);
    }

    #[test]
    fn converges_on_bracket_width() {
        // A derivative that never gets small: sign flip without a root.
        let df = |x: f64| if x < 0.3 { -1.0 } else { 1.0 };
        let config = Config::new(1e-3, 100).unwrap();

        let solution = minimize_unobserved(&|x: f64| (x - 0.3).abs(), &df, [0.0, 1.0], &config)
            .unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 0.3, epsilon = 1e-3);
        // 1 / 2^10 < 1e-3 <= 1 / 2^9
        assert_eq!(solution.iters, 10);
    }

    #[test]
    fn stationary_left_endpoint_is_the_answer() {
        let solution =
            minimize_unobserved(&quadratic, &quadratic_df, [2.0, 5.0], &Config::default())
                .unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.x, 2.0);
        assert_eq!(solution.fx, -1.0);
        assert!(solution.trace.is_empty());
    }

    #[test]
    fn stationary_right_endpoint_is_the_answer() {
        let solution =
            minimize_unobserved(&quadratic, &quadratic_df, [-1.0, 2.0], &Config::default())
                .unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.x, 2.0);
        assert_eq!(solution.iters, 0);
    }

    #[test]
    fn nearly_stationary_endpoint_within_tolerance() {
        // f'(2 + 1e-7) = 2e-7 < 1e-5, so the left endpoint already qualifies.
        let a = 2.0 + 1e-7;
        let solution =
            minimize_unobserved(&quadratic, &quadratic_df, [a, 5.0], &Config::default()).unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.x, a);
    }

    #[test]
    fn rejects_missing_sign_change() {
        let result = minimize_unobserved(&quadratic, &quadratic_df, [3.0, 5.0], &Config::default());

        assert_eq!(
            result,
            Err(Error::NoSignChange {
                left: 3.0,
                right: 5.0,
                df_left: 2.0,
                df_right: 6.0,
            })
        );
    }

    #[test]
    fn observer_can_stop_early() {
        let observer = |_: &Record| Some(Action::StopEarly);
        let solution =
            minimize(&quadratic, &quadratic_df, [-2.0, 5.0], &Config::default(), observer).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.x, 1.5);
    }
}
