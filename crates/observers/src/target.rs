use linemin_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a search once a record's objective reaches a target value.
///
/// Useful when any point below a known threshold is good enough and the
/// remaining passes would only refine it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtTarget {
    target: f64,
}

impl StopAtTarget {
    /// Creates an observer that stops when `objective <= target`.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    /// Returns the target objective value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl<R, A> Observer<R, A> for StopAtTarget
where
    R: HasObjective,
    A: CanStopEarly,
{
    fn observe(&mut self, record: &R) -> Option<A> {
        (record.objective() <= self.target).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use linemin_solvers::{Config, Status, dichotomous, newton};

    fn parabola(x: f64) -> f64 {
        (x - 2.0).powi(2) + 1.0
    }

    #[test]
    fn stops_bracket_search_near_target() {
        let config = dichotomous::Config::new(1e-8, 100, 1e-9).unwrap();

        let solution =
            dichotomous::minimize(&parabola, [0.0, 5.0], &config, StopAtTarget::new(1.01)).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        let last = solution.trace.last().unwrap();
        assert!(last.f1.min(last.f2) <= 1.01);

        // Every earlier pass stayed above the target.
        for record in &solution.trace.records()[..solution.iters - 1] {
            assert!(record.f1.min(record.f2) > 1.01);
        }
    }

    #[test]
    fn unreachable_target_never_stops() {
        let df = |x: f64| 2.0 * (x - 2.0);
        let d2f = |_: f64| 2.0;

        let solution =
            newton::minimize(&parabola, &df, &d2f, 0.0, &Config::default(), StopAtTarget::new(0.0))
                .unwrap();

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 2.0);
    }
}
