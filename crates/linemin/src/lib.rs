//! One-dimensional function minimization with step-by-step traces.
//!
//! `linemin` is the entry point a front-end talks to. It picks an objective
//! (a built-in [`Catalog`] entry or a custom formula), runs one of the search
//! methods from `linemin-solvers`, and hands back a [`Solution`] whose trace
//! records every pass for display.
//!
//! ```
//! use linemin::{Method, Settings, Start, build_function, run_search};
//!
//! let f = build_function("x^2 - 4*x + 3").unwrap();
//! let solution = run_search(
//!     Method::Golden,
//!     &f,
//!     Start::Bracket([-2.0, 5.0]),
//!     &Settings::default(),
//! )
//! .unwrap();
//!
//! assert!((solution.x - 2.0).abs() < 1e-5);
//! ```
//!
//! # Modules
//!
//! The method implementations live in [`solvers`]; reusable observers such as
//! a logging observer live in [`observers`].

mod catalog;
mod error;
mod function;
mod method;
mod search;

pub use catalog::Catalog;
pub use error::Error;
pub use function::{Derivative, Function, SecondDerivative, build_derivatives, build_function};
pub use method::{Method, Settings, Start};
pub use search::{Record, run_search, run_search_with};

pub use linemin_core::{Objective, Observer, Point, derivative};
pub use linemin_expr::Expression;
pub use linemin_observers as observers;
pub use linemin_solvers as solvers;
pub use linemin_solvers::{Action, Bracket, Solution, Status, Trace};

/// Samples `f` over `bounds` for plotting, using
/// [`sample::DEFAULT_COUNT`](linemin_core::sample::DEFAULT_COUNT) intervals.
///
/// Points where `x` or `f(x)` is not finite are skipped.
#[must_use]
pub fn sample(f: &Function, bounds: [f64; 2]) -> Vec<Point> {
    linemin_core::sample(f, bounds, linemin_core::sample::DEFAULT_COUNT)
}
