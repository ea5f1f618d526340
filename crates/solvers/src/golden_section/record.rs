use crate::Bracket;

/// One pass of golden-section search, captured before the reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Pass number, starting at 1.
    pub iter: usize,

    /// The bracket `[a, b]` at the start of the pass.
    pub bracket: Bracket,

    /// Inner left point.
    pub c: f64,

    /// Inner right point.
    pub d: f64,

    /// Objective value at `c`.
    pub fc: f64,

    /// Objective value at `d`.
    pub fd: f64,
}
