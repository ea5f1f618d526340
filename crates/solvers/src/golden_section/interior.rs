use linemin_core::Objective;

use crate::Bracket;

use super::Record;

/// The golden ratio: φ = (1 + √5) / 2
pub(super) const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ
///
/// This equals φ - 1 due to the golden ratio's unique property.
pub(super) const INV_PHI: f64 = PHI - 1.0;

/// Golden-section bracket with both interior points and their values.
#[derive(Debug, Clone, Copy)]
pub(super) struct Interior {
    bracket: Bracket,

    /// Inner left point at `b - (b - a) / φ`.
    c: f64,

    /// Inner right point at `a + (b - a) / φ`.
    d: f64,

    fc: f64,
    fd: f64,
}

impl Interior {
    /// Positions both interior points and evaluates them.
    pub(super) fn new<O: Objective + ?Sized>(f: &O, bracket: Bracket) -> Self {
        let c = inner_left(bracket.left(), bracket.right());
        let d = inner_right(bracket.left(), bracket.right());
        Self {
            bracket,
            c,
            d,
            fc: f.value(c),
            fd: f.value(d),
        }
    }

    pub(super) fn bracket(&self) -> Bracket {
        self.bracket
    }

    pub(super) fn record(&self, iter: usize) -> Record {
        Record {
            iter,
            bracket: self.bracket,
            c: self.c,
            d: self.d,
            fc: self.fc,
            fd: self.fd,
        }
    }

    /// Discards the side with the larger value, evaluating one new point.
    pub(super) fn shrink<O: Objective + ?Sized>(&mut self, f: &O) {
        let (a, b) = (self.bracket.left(), self.bracket.right());

        if self.fd < self.fc {
            // Keep [c, b]; old d becomes the new c.
            let left = self.c;
            self.bracket = Bracket::ordered(left, b);
            self.c = self.d;
            self.fc = self.fd;
            self.d = inner_right(left, b);
            self.fd = f.value(self.d);
        } else {
            // Keep [a, d]; old c becomes the new d.
            let right = self.d;
            self.bracket = Bracket::ordered(a, right);
            self.d = self.c;
            self.fd = self.fc;
            self.c = inner_left(a, right);
            self.fc = f.value(self.c);
        }
    }
}

fn inner_left(a: f64, b: f64) -> f64 {
    b - (b - a) * INV_PHI
}

fn inner_right(a: f64, b: f64) -> f64 {
    a + (b - a) * INV_PHI
}
