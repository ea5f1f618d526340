//! Capability traits for cross-method observers.
//!
//! These traits abstract over method-specific record and action types,
//! enabling observers to work generically across different search methods.
//!
//! # Record traits
//!
//! - [`HasIteration`]: records that carry a pass number
//! - [`HasObjective`]: records that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use linemin_core::Observer;
//! use linemin_observers::traits::{CanStopEarly, HasIteration};
//!
//! struct AfterPasses(usize);
//!
//! impl<R: HasIteration, A: CanStopEarly> Observer<R, A> for AfterPasses {
//!     fn observe(&mut self, record: &R) -> Option<A> {
//!         (record.iteration() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use linemin_solvers::{Action, bisection, dichotomous, fibonacci, golden_section, newton, uniform};

/// A record that carries its 1-based pass number.
pub trait HasIteration {
    /// Returns the pass number.
    fn iteration(&self) -> usize;
}

/// A record that carries an objective value.
pub trait HasObjective {
    /// Returns the smallest objective value evaluated during the pass.
    ///
    /// Returns `f64::NAN` when no value is available.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the search early.
    fn stop_early() -> Self;
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

macro_rules! impl_has_iteration {
    ($($record:ty),* $(,)?) => {
        $(
            impl HasIteration for $record {
                fn iteration(&self) -> usize {
                    self.iter
                }
            }
        )*
    };
}

impl_has_iteration!(
    bisection::Record,
    dichotomous::Record,
    fibonacci::Record,
    golden_section::Record,
    newton::Record,
    uniform::Record,
);

// --- HasObjective impls ---

impl HasObjective for golden_section::Record {
    fn objective(&self) -> f64 {
        self.fc.min(self.fd)
    }
}

impl HasObjective for fibonacci::Record {
    fn objective(&self) -> f64 {
        self.fc.min(self.fd)
    }
}

impl HasObjective for bisection::Record {
    fn objective(&self) -> f64 {
        self.fc
    }
}

impl HasObjective for newton::Record {
    fn objective(&self) -> f64 {
        self.fx
    }
}

impl HasObjective for dichotomous::Record {
    fn objective(&self) -> f64 {
        self.f1.min(self.f2)
    }
}

impl HasObjective for uniform::Record {
    fn objective(&self) -> f64 {
        self.fx
    }
}
