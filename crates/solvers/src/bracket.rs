use thiserror::Error;

/// Errors that can occur when validating bracket endpoints.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// The left endpoint is not strictly below the right one.
    #[error("left endpoint {left} must be less than right endpoint {right}")]
    NotIncreasing { left: f64, right: f64 },
}

/// An interval `[left, right]` expected to contain the minimum or stationary
/// point being searched for.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bracket {
    left: f64,
    right: f64,
}

impl Bracket {
    /// Creates a bracket from finite, strictly increasing endpoints.
    ///
    /// Reversed endpoints are rejected rather than swapped.
    ///
    /// # Errors
    ///
    /// Returns a [`BracketError`] if an endpoint is non-finite or if
    /// `left >= right`.
    pub fn new(bounds: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bounds;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        if left >= right {
            return Err(BracketError::NotIncreasing { left, right });
        }

        Ok(Self { left, right })
    }

    /// Creates a bracket from endpoints a method has already ordered.
    pub(crate) fn ordered(left: f64, right: f64) -> Self {
        debug_assert!(left <= right, "bracket endpoints out of order");
        Self { left, right }
    }

    /// Returns the left endpoint.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the right endpoint.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the endpoints as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns true if the width is strictly below `tolerance`.
    #[must_use]
    pub fn is_converged(&self, tolerance: f64) -> bool {
        self.width() < tolerance
    }
}

impl From<Bracket> for [f64; 2] {
    fn from(bracket: Bracket) -> Self {
        bracket.as_array()
    }
}
