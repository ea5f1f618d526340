use std::fmt;

use linemin_core::Objective;

use crate::{Method, Start};

/// Built-in objectives with closed-form derivatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Catalog {
    /// `(x-2)^2 + 1`, minimum 1 at `x = 2`.
    Parabola,

    /// `x^2 - 4*x + 3`, minimum -1 at `x = 2`.
    Quadratic,

    /// `x^4 - 3*x^3 + 2`, minimum at `x = 9/4`.
    ///
    /// Its derivative also vanishes at the inflection point `x = 0`.
    Quartic,
}

impl Catalog {
    /// Every catalog entry, in display order.
    pub const ALL: [Catalog; 3] = [Catalog::Parabola, Catalog::Quadratic, Catalog::Quartic];

    /// Returns the lookup key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Parabola => "parabola",
            Self::Quadratic => "quadratic",
            Self::Quartic => "quartic",
        }
    }

    /// Looks up an entry by key, ignoring ASCII case.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|entry| entry.key().eq_ignore_ascii_case(key))
    }

    /// Returns the formula in the expression syntax.
    #[must_use]
    pub fn formula(self) -> &'static str {
        match self {
            Self::Parabola => "(x-2)^2 + 1",
            Self::Quadratic => "x^2 - 4*x + 3",
            Self::Quartic => "x^4 - 3*x^3 + 2",
        }
    }

    #[must_use]
    pub fn derivative(self, x: f64) -> f64 {
        match self {
            Self::Parabola => 2.0 * (x - 2.0),
            Self::Quadratic => 2.0 * x - 4.0,
            Self::Quartic => 4.0 * x.powi(3) - 9.0 * x.powi(2),
        }
    }

    #[must_use]
    pub fn second_derivative(self, x: f64) -> f64 {
        match self {
            Self::Parabola | Self::Quadratic => 2.0,
            Self::Quartic => 12.0 * x.powi(2) - 18.0 * x,
        }
    }

    /// Returns a bracket that contains the minimum and a sign change of the
    /// derivative.
    #[must_use]
    pub fn default_bracket(self) -> [f64; 2] {
        match self {
            Self::Parabola => [0.0, 5.0],
            Self::Quadratic => [-2.0, 5.0],
            Self::Quartic => [1.0, 3.0],
        }
    }

    /// Returns a start point from which Newton's method reaches the minimum.
    #[must_use]
    pub fn default_start(self) -> f64 {
        match self {
            Self::Parabola | Self::Quadratic => 0.0,
            Self::Quartic => 3.0,
        }
    }

    /// Returns the interval worth plotting.
    #[must_use]
    pub fn domain(self) -> [f64; 2] {
        match self {
            Self::Parabola => [-1.0, 5.0],
            Self::Quadratic => [-2.0, 6.0],
            Self::Quartic => [-1.5, 3.5],
        }
    }

    /// Returns the default start for `method`.
    #[must_use]
    pub fn start_for(self, method: Method) -> Start {
        if method.needs_point() {
            Start::Point(self.default_start())
        } else {
            Start::Bracket(self.default_bracket())
        }
    }
}

impl Objective for Catalog {
    fn value(&self, x: f64) -> f64 {
        match self {
            Self::Parabola => (x - 2.0).powi(2) + 1.0,
            Self::Quadratic => x * x - 4.0 * x + 3.0,
            Self::Quartic => x.powi(4) - 3.0 * x.powi(3) + 2.0,
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
