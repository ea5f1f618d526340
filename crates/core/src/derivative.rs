//! Central-difference derivative estimators.
//!
//! Used as a fallback when no closed-form derivative is available. The step
//! size is fixed at [`STEP`]; there is no adaptive refinement, so accuracy is
//! limited for ill-conditioned functions or values near machine epsilon.
//!
//! ```text
//! f'(x)  ≈ (f(x + h) - f(x - h)) / 2h
//! f''(x) ≈ (f(x + h) - 2 f(x) + f(x - h)) / h²
//! ```

use crate::Objective;

/// Finite-difference step size.
pub const STEP: f64 = 1e-6;

/// Estimates `f'(x)` with a central difference.
pub fn first<O: Objective + ?Sized>(f: &O, x: f64) -> f64 {
    (f.value(x + STEP) - f.value(x - STEP)) / (2.0 * STEP)
}

/// Estimates `f''(x)` with a central difference.
pub fn second<O: Objective + ?Sized>(f: &O, x: f64) -> f64 {
    (f.value(x + STEP) - 2.0 * f.value(x) + f.value(x - STEP)) / (STEP * STEP)
}

/// Returns numeric first and second derivatives of `f`.
pub fn numeric<O: Objective + ?Sized>(
    f: &O,
) -> (NumericDerivative<'_, O>, NumericSecondDerivative<'_, O>) {
    (NumericDerivative::new(f), NumericSecondDerivative::new(f))
}

/// The first derivative of a borrowed objective, estimated numerically.
#[derive(Debug)]
pub struct NumericDerivative<'a, O: ?Sized> {
    f: &'a O,
}

impl<'a, O: ?Sized> NumericDerivative<'a, O> {
    /// Wraps `f`.
    #[must_use]
    pub fn new(f: &'a O) -> Self {
        Self { f }
    }
}

impl<O: ?Sized> Clone for NumericDerivative<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ?Sized> Copy for NumericDerivative<'_, O> {}

impl<O: Objective + ?Sized> Objective for NumericDerivative<'_, O> {
    fn value(&self, x: f64) -> f64 {
        first(self.f, x)
    }
}

/// The second derivative of a borrowed objective, estimated numerically.
#[derive(Debug)]
pub struct NumericSecondDerivative<'a, O: ?Sized> {
    f: &'a O,
}

impl<'a, O: ?Sized> NumericSecondDerivative<'a, O> {
    /// Wraps `f`.
    #[must_use]
    pub fn new(f: &'a O) -> Self {
        Self { f }
    }
}

impl<O: ?Sized> Clone for NumericSecondDerivative<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ?Sized> Copy for NumericSecondDerivative<'_, O> {}

impl<O: Objective + ?Sized> Objective for NumericSecondDerivative<'_, O> {
    fn value(&self, x: f64) -> f64 {
        second(self.f, x)
    }
}
