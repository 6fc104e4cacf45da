use std::f64::consts::TAU;

use crate::error::{MobiusError, Result};
use crate::math::{Point3, TOLERANCE};

use super::{Surface, SurfaceDomain};

/// A Möbius strip in 3D space.
///
/// Defined by a center-line radius `R` and a strip width `w`:
///
/// `x = (R + v*cos(u/2)) * cos(u)`
/// `y = (R + v*cos(u/2)) * sin(u)`
/// `z = v * sin(u/2)`
///
/// Parameters: `u` in `[0, 2*pi]` (rotational), `v` in `[-w/2, w/2]`
/// (across the width). The half-angle `u/2` induces the single half-twist:
/// `cos(u/2)` and `sin(u/2)` flip sign after one full turn, so a point at
/// `(u + 2*pi, -v)` lands on the same 3D location as `(u, v)` and the strip
/// has only one side.
#[derive(Debug, Clone)]
pub struct MobiusStrip {
    radius: f64,
    width: f64,
}

impl MobiusStrip {
    /// Creates a new Möbius strip.
    ///
    /// # Arguments
    ///
    /// * `radius` - Center-line radius `R` (must be positive)
    /// * `width` - Strip width `w` (must be positive; `w < 2R` is
    ///   recommended to avoid self-intersection but is not enforced)
    ///
    /// # Errors
    ///
    /// Returns an error if either the radius or the width is non-positive.
    pub fn new(radius: f64, width: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(MobiusError::InvalidParameter {
                parameter: "radius",
                value: radius,
                reason: "center-line radius must be positive",
            });
        }
        if width < TOLERANCE {
            return Err(MobiusError::InvalidParameter {
                parameter: "width",
                value: width,
                reason: "strip width must be positive",
            });
        }

        Ok(Self { radius, width })
    }

    /// Returns the center-line radius `R`.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the strip width `w`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Surface for MobiusStrip {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let half = u / 2.0;
        let r = self.radius + v * half.cos();
        Point3::new(r * u.cos(), r * u.sin(), v * half.sin())
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::new(0.0, TAU, -self.width / 2.0, self.width / 2.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn unit_strip() -> MobiusStrip {
        MobiusStrip::new(1.0, 0.3).unwrap()
    }

    #[test]
    fn evaluate_on_center_line() {
        let s = unit_strip();
        // v=0 traces the center circle of radius R.
        let p = s.evaluate(0.0, 0.0);
        assert!((p - Point3::new(1.0, 0.0, 0.0)).norm() < TOLERANCE);
        let p = s.evaluate(PI, 0.0);
        assert!((p - Point3::new(-1.0, 0.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn evaluate_at_outer_edge() {
        let s = unit_strip();
        // u=0, v=w/2: the edge sits flat at (R + w/2, 0, 0).
        let p = s.evaluate(0.0, 0.15);
        assert!((p - Point3::new(1.15, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn half_turn_lifts_the_edge() {
        let s = unit_strip();
        // At u=pi the strip cross-section is vertical: cos(u/2)=0, sin(u/2)=1.
        let p = s.evaluate(PI, 0.15);
        assert!((p - Point3::new(-1.0, 0.0, 0.15)).norm() < 1e-9);
    }

    #[test]
    fn half_twist_identity() {
        let s = unit_strip();
        // P(u + 2*pi, -v) = P(u, v): the defining single-sidedness property.
        for &(u, v) in &[(0.0, 0.1), (1.0, -0.12), (PI, 0.15), (4.5, 0.05)] {
            let p = s.evaluate(u, v);
            let q = s.evaluate(u + TAU, -v);
            assert!((p - q).norm() < 1e-9, "identity failed for u={u}, v={v}");
        }
    }

    #[test]
    fn domain_spans_one_turn_and_the_width() {
        let s = unit_strip();
        let d = s.domain();
        assert!(d.u_min.abs() < TOLERANCE);
        assert!((d.u_max - TAU).abs() < TOLERANCE);
        assert!((d.v_min + 0.15).abs() < TOLERANCE);
        assert!((d.v_max - 0.15).abs() < TOLERANCE);
    }

    #[test]
    fn invalid_radius() {
        assert!(MobiusStrip::new(0.0, 0.3).is_err());
        assert!(MobiusStrip::new(-1.0, 0.3).is_err());
    }

    #[test]
    fn invalid_width() {
        assert!(MobiusStrip::new(1.0, 0.0).is_err());
        assert!(MobiusStrip::new(1.0, -0.2).is_err());
    }

    #[test]
    fn wide_strip_is_permitted() {
        // w >= 2R self-intersects but is deliberately not rejected.
        assert!(MobiusStrip::new(1.0, 3.0).is_ok());
    }
}
