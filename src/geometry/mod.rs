mod mesh;
mod mobius;

pub use mesh::{Partials, SurfaceMesh};
pub use mobius::MobiusStrip;

use crate::math::Point3;

/// Parameter domain for a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDomain {
    /// Start of the U parameter range.
    pub u_min: f64,
    /// End of the U parameter range.
    pub u_max: f64,
    /// Start of the V parameter range.
    pub v_min: f64,
    /// End of the V parameter range.
    pub v_max: f64,
}

impl SurfaceDomain {
    /// Creates a new surface domain.
    #[must_use]
    pub fn new(u_min: f64, u_max: f64, v_min: f64, v_max: f64) -> Self {
        Self {
            u_min,
            u_max,
            v_min,
            v_max,
        }
    }
}

/// Trait for parametric surfaces in 3D space.
///
/// Evaluation is total: every surface here is defined on the whole real
/// `(u, v)` plane, with `domain()` marking the fundamental region to sample.
pub trait Surface {
    /// Evaluates the surface at parameters `(u, v)`, returning the 3D point.
    fn evaluate(&self, u: f64, v: f64) -> Point3;

    /// Returns the parameter domain of the surface.
    fn domain(&self) -> SurfaceDomain;
}
