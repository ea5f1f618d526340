use std::slice;

use linemin_core::Observer;

use crate::Action;

/// Indicates how a search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Used up the iteration budget without converging.
    ///
    /// Fibonacci search reports this when its pass count was capped before
    /// the final bracket could reach the tolerance.
    MaxIters,

    /// Newton's method stopped because the second derivative vanished.
    Stalled,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// An append-only sequence of iteration records, in iteration order.
///
/// Only the solvers in this crate can append; callers get read-only access.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trace<R> {
    records: Vec<R>,
}

impl<R> Trace<R> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Appends a record and shows it to the observer.
    pub(crate) fn emit<Obs>(&mut self, record: R, observer: &mut Obs) -> Option<Action>
    where
        Obs: Observer<R, Action>,
    {
        let index = self.records.len();
        self.records.push(record);
        observer.observe(&self.records[index])
    }

    /// Returns the records as a slice.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no record was appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&R> {
        self.records.last()
    }

    /// Iterates over the records in iteration order.
    pub fn iter(&self) -> slice::Iter<'_, R> {
        self.records.iter()
    }

    /// Converts every record, preserving order.
    #[must_use]
    pub fn map<T>(self, f: impl FnMut(R) -> T) -> Trace<T> {
        Trace {
            records: self.records.into_iter().map(f).collect(),
        }
    }

    /// Consumes the trace and returns the records.
    #[must_use]
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<'a, R> IntoIterator for &'a Trace<R> {
    type Item = &'a R;
    type IntoIter = slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R> IntoIterator for Trace<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// The result of a search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<R> {
    /// Final search status.
    pub status: Status,

    /// Best estimate of the minimizer.
    ///
    /// Bracket methods report the midpoint of their final bracket, which is
    /// not necessarily the evaluated point with the smallest value.
    pub x: f64,

    /// Objective value at `x`.
    pub fx: f64,

    /// Number of records in the trace.
    pub iters: usize,

    /// Every pass of the search, in order.
    pub trace: Trace<R>,
}

impl<R> Solution<R> {
    pub(crate) fn new(status: Status, x: f64, fx: f64, trace: Trace<R>) -> Self {
        Self {
            status,
            x,
            fx,
            iters: trace.len(),
            trace,
        }
    }

    /// Converts the trace records, keeping every other field.
    ///
    /// Useful for collecting results of different methods under one record
    /// type.
    #[must_use]
    pub fn map_records<T>(self, f: impl FnMut(R) -> T) -> Solution<T> {
        Solution {
            status: self.status,
            x: self.x,
            fx: self.fx,
            iters: self.iters,
            trace: self.trace.map(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_appends_then_observes() {
        let mut trace = Trace::with_capacity(2);
        let mut seen = Vec::new();
        let mut observer = |record: &u32| {
            seen.push(*record);
            (*record == 2).then_some(Action::StopEarly)
        };

        assert_eq!(trace.emit(1, &mut observer), None);
        assert_eq!(trace.emit(2, &mut observer), Some(Action::StopEarly));

        assert_eq!(trace.records(), &[1, 2]);
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn solution_counts_records() {
        let mut trace = Trace::with_capacity(3);
        for i in 1..=3_u32 {
            trace.emit(i, &mut ());
        }

        let solution = Solution::new(Status::MaxIters, 0.5, 1.0, trace);
        assert_eq!(solution.iters, 3);
        assert_eq!(solution.trace.last(), Some(&3));

        let doubled = solution.map_records(|r| f64::from(r) * 2.0);
        assert_eq!(doubled.trace.records(), &[2.0, 4.0, 6.0]);
        assert_eq!(doubled.status, Status::MaxIters);
    }
}
