pub mod gradient;
pub mod grid;
pub mod quadrature;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// `n` uniformly spaced samples covering `[start, end]`, endpoints included.
///
/// For `n < 2` the span cannot be represented; returns an empty vector or
/// the single start value.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return (0..n).map(|_| start).collect();
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}
