/// A scalar objective function of one variable.
///
/// Implementations must be pure: repeated calls with the same `x` return the
/// same value and have no side effects. Solvers may call [`value`] many times
/// per iteration.
///
/// Closures of the form `Fn(f64) -> f64` implement `Objective` directly.
///
/// [`value`]: Objective::value
pub trait Objective {
    /// Evaluates the function at `x`.
    fn value(&self, x: f64) -> f64;
}

/// Blanket implementation for objective closures.
impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
