use std::fmt::Debug;

use linemin_core::Observer;
use log::Level;

use crate::traits::{HasIteration, HasObjective};

/// Logs every record it observes, never acting on the search.
///
/// Records go to the `log` facade under the `linemin` target; install any
/// `log` implementation to see them.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    label: &'static str,
    level: Level,
    verbose: bool,
}

impl Logger {
    /// Creates a logger that prefixes each line with `label` and logs at
    /// `Level::Info`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            level: Level::Info,
            verbose: false,
        }
    }

    /// Sets the level records are logged at.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Logs the full record instead of the pass number and objective only.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

impl<R, A> Observer<R, A> for Logger
where
    R: HasIteration + HasObjective + Debug,
{
    fn observe(&mut self, record: &R) -> Option<A> {
        if self.verbose {
            log::log!(target: "linemin", self.level, "{}: {record:?}", self.label);
        } else {
            log::log!(
                target: "linemin",
                self.level,
                "{} pass {}: objective = {}",
                self.label,
                record.iteration(),
                record.objective()
            );
        }
        None
    }
}
