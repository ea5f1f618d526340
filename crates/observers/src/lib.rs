//! Reusable observers for linemin searches.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every search method in `linemin-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-method observers
//!   ([`HasIteration`], [`HasObjective`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Logger`]: writes each record to the `log` facade
//! - [`StopAtTarget`]: stops a search once the objective is good enough
//!
//! [`Observer`]: linemin_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

mod logger;
mod target;

pub mod traits;

pub use logger::Logger;
pub use target::StopAtTarget;
