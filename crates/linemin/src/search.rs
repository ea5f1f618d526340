use linemin_core::Observer;
use linemin_observers::traits::{HasIteration, HasObjective};
use linemin_solvers::{
    Action, Solution, bisection, dichotomous, fibonacci, golden_section, newton, uniform,
};
use log::debug;

use crate::{Error, Function, Method, Settings, Start, build_derivatives};

/// Grid points per pass for sequential search.
const SEQUENTIAL_SAMPLES: usize = 10;

/// A trace record from any method.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "method", rename_all = "lowercase"))]
pub enum Record {
    Golden(golden_section::Record),
    Fibonacci(fibonacci::Record),
    Bisection(bisection::Record),
    Newton(newton::Record),
    Dichotomous(dichotomous::Record),
    Sequential(uniform::Record),
}

impl Record {
    /// Returns the method that produced this record.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::Golden(_) => Method::Golden,
            Self::Fibonacci(_) => Method::Fibonacci,
            Self::Bisection(_) => Method::Bisection,
            Self::Newton(_) => Method::Newton,
            Self::Dichotomous(_) => Method::Dichotomous,
            Self::Sequential(_) => Method::Sequential,
        }
    }

    /// Returns the bracket at the start of the pass, for bracket methods.
    #[must_use]
    pub fn bracket(&self) -> Option<linemin_solvers::Bracket> {
        match self {
            Self::Golden(r) => Some(r.bracket),
            Self::Fibonacci(r) => Some(r.bracket),
            Self::Bisection(r) => Some(r.bracket),
            Self::Dichotomous(r) => Some(r.bracket),
            Self::Sequential(r) => Some(r.bracket),
            Self::Newton(_) => None,
        }
    }
}

impl HasIteration for Record {
    fn iteration(&self) -> usize {
        match self {
            Self::Golden(r) => r.iteration(),
            Self::Fibonacci(r) => r.iteration(),
            Self::Bisection(r) => r.iteration(),
            Self::Newton(r) => r.iteration(),
            Self::Dichotomous(r) => r.iteration(),
            Self::Sequential(r) => r.iteration(),
        }
    }
}

impl HasObjective for Record {
    fn objective(&self) -> f64 {
        match self {
            Self::Golden(r) => r.objective(),
            Self::Fibonacci(r) => r.objective(),
            Self::Bisection(r) => r.objective(),
            Self::Newton(r) => r.objective(),
            Self::Dichotomous(r) => r.objective(),
            Self::Sequential(r) => r.objective(),
        }
    }
}

/// Runs one search method on `f`.
///
/// Derivatives come from [`build_derivatives`]. Method extras are derived
/// from `settings`:
///
/// - Fibonacci picks the smallest `n` whose final bracket is narrower than
///   the tolerance, capped at `max_iters`.
/// - Dichotomous search uses an interior point separation of `tolerance / 4`.
/// - Sequential search evaluates 10 grid points per pass.
///
/// # Errors
///
/// Returns [`Error::StartMismatch`] if a bracket method gets a point or
/// Newton gets a bracket, and [`Error::Precondition`] for invalid brackets,
/// settings, or a derivative without a sign change (bisection).
pub fn run_search(
    method: Method,
    f: &Function,
    start: Start,
    settings: &Settings,
) -> Result<Solution<Record>, Error> {
    run_search_with(method, f, start, settings, ())
}

/// Runs one search method on `f`, showing every record to `observer`.
///
/// # Errors
///
/// See [`run_search`].
pub fn run_search_with<Obs>(
    method: Method,
    f: &Function,
    start: Start,
    settings: &Settings,
    mut observer: Obs,
) -> Result<Solution<Record>, Error>
where
    Obs: Observer<Record, Action>,
{
    let config = settings.config()?;
    let tolerance = config.tolerance();
    debug!("running {method} search on {f} from {start:?}");

    let solution = match (method, start) {
        (Method::Golden, Start::Bracket(bracket)) => {
            let observer = |r: &golden_section::Record| observer.observe(&Record::Golden(*r));
            golden_section::minimize(f, bracket, &config, observer)?.map_records(Record::Golden)
        }

        (Method::Fibonacci, Start::Bracket(bracket)) => {
            let width = bracket[1] - bracket[0];
            let config = fibonacci::Config::for_tolerance(width, tolerance, config.max_iters())?;
            let observer = |r: &fibonacci::Record| observer.observe(&Record::Fibonacci(*r));
            fibonacci::minimize(f, bracket, &config, observer)?.map_records(Record::Fibonacci)
        }

        (Method::Bisection, Start::Bracket(bracket)) => {
            let (df, _) = build_derivatives(f);
            let observer = |r: &bisection::Record| observer.observe(&Record::Bisection(*r));
            bisection::minimize(f, &df, bracket, &config, observer)?.map_records(Record::Bisection)
        }

        (Method::Newton, Start::Point(x0)) => {
            let (df, d2f) = build_derivatives(f);
            let observer = |r: &newton::Record| observer.observe(&Record::Newton(*r));
            newton::minimize(f, &df, &d2f, x0, &config, observer)?.map_records(Record::Newton)
        }

        (Method::Dichotomous, Start::Bracket(bracket)) => {
            let config =
                dichotomous::Config::new(tolerance, config.max_iters(), tolerance / 4.0)?;
            let observer = |r: &dichotomous::Record| observer.observe(&Record::Dichotomous(*r));
            dichotomous::minimize(f, bracket, &config, observer)?
                .map_records(Record::Dichotomous)
        }

        (Method::Sequential, Start::Bracket(bracket)) => {
            let config = uniform::Config::new(tolerance, config.max_iters(), SEQUENTIAL_SAMPLES)?;
            let observer = |r: &uniform::Record| observer.observe(&Record::Sequential(*r));
            uniform::minimize(f, bracket, &config, observer)?.map_records(Record::Sequential)
        }

        (method, Start::Point(_)) => {
            return Err(Error::StartMismatch {
                method,
                expected: "bracket",
            });
        }

        (method, Start::Bracket(_)) => {
            return Err(Error::StartMismatch {
                method,
                expected: "point",
            });
        }
    };

    Ok(solution)
}
