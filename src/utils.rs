//! Numeric helpers for axis ranges and label placement.
/// Smallest and largest finite value of `x`, or `None` if there is none.
pub fn extent<I: IntoIterator<Item = f64>>(x: I) -> Option<(f64, f64)> {
    x.into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Axis range covering `x` with `pad` (a fraction of the span) added on both sides.
///  - A single repeated value is widened by one unit either side.
///  - An empty input gives the unit interval.
pub fn padded_extent<I: IntoIterator<Item = f64>>(x: I, pad: f64) -> (f64, f64) {
    match extent(x) {
        None => (0.0, 1.0),
        Some((lo, hi)) if (hi - lo).abs() < f64::EPSILON => (lo - 1.0, hi + 1.0),
        Some((lo, hi)) => {
            let margin = (hi - lo) * pad;
            (lo - margin, hi + margin)
        }
    }
}

/// Position `frac` of the way from `lo` to `hi`.
pub fn lerp(lo: f64, hi: f64, frac: f64) -> f64 {
    lo + (hi - lo) * frac
}
