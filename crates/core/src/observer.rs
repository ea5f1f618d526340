/// Watches a search pass by pass and may ask it to act.
///
/// Each search method shows its observer every iteration record right after
/// appending it to the trace. Returning `Some(action)` asks the method to
/// act on it (for example, to stop early); `None` lets the search continue.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. The unit type `()`
/// is the observer that never acts.
pub trait Observer<E, A> {
    /// Inspects one record and optionally requests an action.
    fn observe(&mut self, record: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, record: &E) -> Option<A> {
        self(record)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _record: &E) -> Option<A> {
        None
    }
}
