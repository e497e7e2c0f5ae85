//! Three-point and two-point interpolation on equally spaced samples.
//!
//! Formulae follow Meeus, *Astronomical Algorithms*, chapter 3.

/// Extremum of the parabola through three equally spaced samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    /// Interpolated extremal value.
    pub value: f64,
    /// Position of the extremum relative to the middle sample, in units of
    /// the sample spacing (negative means before the middle sample).
    pub offset: f64,
}

/// Fit a parabola through `(y1, y2, y3)` taken at abscissae `-1, 0, +1` and
/// return its vertex.
///
/// Collinear samples have no vertex; the result is then non-finite.
pub fn extremum(y1: f64, y2: f64, y3: f64) -> Extremum {
    let a = y2 - y1;
    let b = y3 - y2;
    let c = b - a;
    let sum = a + b;

    Extremum {
        value: y2 - (sum * sum) / (8.0 * c),
        offset: -sum / (2.0 * c),
    }
}

/// Fraction of the interval `[y0, y]` at which the straight line through the
/// two samples crosses zero.
pub fn zero_crossing_fraction(y0: f64, y: f64) -> f64 {
    (0.0 - y0) / (y - y0)
}
