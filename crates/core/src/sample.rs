//! Dense sampling of an objective for plotting.

use crate::Objective;

/// Default number of intervals used when sampling for a plot.
pub const DEFAULT_COUNT: usize = 300;

/// A sampled `(x, f(x))` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Samples `f` at `count + 1` evenly spaced points over `bounds`.
///
/// Both endpoints are included. Pairs where `x` or `f(x)` is not finite are
/// skipped, so the result may hold fewer than `count + 1` points.
/// A `count` of zero yields no points.
#[must_use]
pub fn sample<O: Objective + ?Sized>(f: &O, bounds: [f64; 2], count: usize) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let [lo, hi] = bounds;
    #[allow(clippy::cast_precision_loss)]
    let spacing = (hi - lo) / count as f64;

    (0..=count)
        .filter_map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let x = lo + i as f64 * spacing;
            let y = f.value(x);
            (x.is_finite() && y.is_finite()).then_some(Point { x, y })
        })
        .collect()
}
