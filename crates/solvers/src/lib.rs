//! One-dimensional minimization methods.
//!
//! Every method shares one contract: given an [`Objective`] (plus derivatives
//! where the method needs them), a starting bracket or point, and a validated
//! configuration, it returns a [`Solution`] holding the optimum estimate and
//! the complete iteration [`Trace`]. Each pass of a method's loop appends
//! exactly one record to the trace.
//!
//! A run ends by convergence or by exhausting its iteration budget, whichever
//! comes first. Reaching the budget is reported as [`Status::MaxIters`], not as
//! an error. Errors are reserved for precondition violations detected before
//! the loop starts.
//!
//! # Methods
//!
//! - [`golden_section`]: golden-ratio bracket reduction, one evaluation per pass
//! - [`fibonacci`]: bracket reduction with Fibonacci ratios, fixed pass count
//! - [`bisection`]: halving on the sign of the derivative
//! - [`newton`]: Newton steps on the derivative using the second derivative
//! - [`dichotomous`]: paired points straddling the midpoint
//! - [`uniform`]: sequential grid sampling narrowed around the best sample
//!
//! When two compared values tie, bracket methods keep the left part of the
//! bracket. This is reproducible but can bias symmetric problems.
//!
//! # Observers
//!
//! Each method has an observed variant taking an [`Observer`] that receives
//! every record as it is appended, and may return [`Action::StopEarly`].
//! The `*_unobserved` variants use a no-op observer.
//!
//! [`Objective`]: linemin_core::Objective
//! [`Observer`]: linemin_core::Observer

mod action;
mod bracket;
mod config;
mod error;
mod solution;

pub mod bisection;
pub mod dichotomous;
pub mod fibonacci;
pub mod golden_section;
pub mod newton;
pub mod uniform;

pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use solution::{Solution, Status, Trace};
