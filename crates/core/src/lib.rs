//! Core traits and numerics for one-dimensional minimization.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! front-ends build on:
//!
//! - [`Objective`]: a pure mapping `f64 -> f64` to be minimized
//! - [`Observer`]: sees each trace record and may stop the search
//! - [`derivative`]: central-difference derivative estimators
//! - [`sample`]: evenly spaced `(x, f(x))` pairs for plotting

pub mod derivative;
mod objective;
mod observer;
pub mod sample;

pub use derivative::{NumericDerivative, NumericSecondDerivative};
pub use objective::Objective;
pub use observer::Observer;
pub use sample::{Point, sample};
