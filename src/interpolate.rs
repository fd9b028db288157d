//! Generic linear interpolation.
//!
//! One primitive serves every fill and line routine: the triangle
//! rasterizer interpolates x over y for edges, the line rasterizer
//! interpolates depth (and brightness) over the dominant axis. Only the
//! role assignment of (dependent, independent) changes.

/// Samples the line through `(i0, d0)` and `(i1, d1)` at every integer
/// value of the independent variable from `floor(i0)` to `floor(i1)`
/// inclusive, returning `(dependent, independent)` pairs.
///
/// The dependent value advances by the constant step
/// `(d1 - d0) / (i1 - i0)` per sample, so the first and last dependent
/// values equal `d0` and `d1` up to one step of rounding error.
///
/// # Panics
/// Panics if `i0 > i1`; callers sort their endpoints first. The
/// degenerate case `i0 == i1` yields the single sample `(d0, i0)`.
pub fn interpolate(d0: f32, i0: f32, d1: f32, i1: f32) -> Vec<(f32, f32)> {
    assert!(
        i0 <= i1,
        "interpolate: independent values out of order ({i0} > {i1})"
    );
    if i0 == i1 {
        return vec![(d0, i0)];
    }

    let step = (d1 - d0) / (i1 - i0);
    let first = i0.floor() as i32;
    let last = i1.floor() as i32;

    let mut samples = Vec::with_capacity((last - first + 1) as usize);
    let mut d = d0;
    for i in first..=last {
        samples.push((d, i as f32));
        d += step;
    }
    samples
}
