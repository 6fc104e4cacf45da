use crate::error::{MobiusError, Result};
use crate::math::gradient::{partial, Axis};
use crate::math::grid::Grid2;
use crate::math::{linspace, Vector3};

use super::Surface;

/// A surface sampled over its parameter domain.
///
/// Holds the two parameter sequences and the three coordinate grids,
/// built once at construction and immutable afterwards. Derived
/// quantities (partial derivatives, area, length) are pure functions of
/// this value, so there is no stale-state hazard when recomputing them.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    u: Vec<f64>,
    v: Vec<f64>,
    x: Grid2,
    y: Grid2,
    z: Grid2,
}

/// The six first-order partial derivative fields of a sampled surface.
///
/// Transient: recomputed on demand from the mesh, never stored on it.
#[derive(Debug, Clone)]
pub struct Partials {
    /// `dx/du`
    pub xu: Grid2,
    /// `dy/du`
    pub yu: Grid2,
    /// `dz/du`
    pub zu: Grid2,
    /// `dx/dv`
    pub xv: Grid2,
    /// `dy/dv`
    pub yv: Grid2,
    /// `dz/dv`
    pub zv: Grid2,
}

impl Partials {
    /// Tangent vector along `u` at a grid point.
    #[must_use]
    pub fn tangent_u(&self, row: usize, col: usize) -> Vector3 {
        Vector3::new(
            self.xu.get(row, col),
            self.yu.get(row, col),
            self.zu.get(row, col),
        )
    }

    /// Tangent vector along `v` at a grid point.
    #[must_use]
    pub fn tangent_v(&self, row: usize, col: usize) -> Vector3 {
        Vector3::new(
            self.xv.get(row, col),
            self.yv.get(row, col),
            self.zv.get(row, col),
        )
    }
}

impl SurfaceMesh {
    /// Samples a surface over its full domain at `n` points per axis.
    ///
    /// Both parameter sequences include their domain endpoints:
    /// `u[i] = u_min + (u_max - u_min) * i / (n - 1)`, and likewise for
    /// `v`. Grids are stored row-major with rows indexed by `v` and
    /// columns by `u`.
    ///
    /// # Errors
    ///
    /// Returns an error if `n < 2` (a grid that small cannot support
    /// finite differencing or quadrature).
    pub fn sample<S: Surface>(surface: &S, n: usize) -> Result<Self> {
        if n < 2 {
            return Err(MobiusError::InsufficientResolution { n });
        }

        let domain = surface.domain();
        let u = linspace(domain.u_min, domain.u_max, n);
        let v = linspace(domain.v_min, domain.v_max, n);

        let mut points = Vec::with_capacity(n * n);
        for &vj in &v {
            for &ui in &u {
                points.push(surface.evaluate(ui, vj));
            }
        }

        let x = Grid2::from_fn(n, n, |row, col| points[row * n + col].x);
        let y = Grid2::from_fn(n, n, |row, col| points[row * n + col].y);
        let z = Grid2::from_fn(n, n, |row, col| points[row * n + col].z);

        Ok(Self { u, v, x, y, z })
    }

    /// The `u` parameter samples.
    #[must_use]
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// The `v` parameter samples.
    #[must_use]
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// The `x` coordinate grid.
    #[must_use]
    pub fn x(&self) -> &Grid2 {
        &self.x
    }

    /// The `y` coordinate grid.
    #[must_use]
    pub fn y(&self) -> &Grid2 {
        &self.y
    }

    /// The `z` coordinate grid.
    #[must_use]
    pub fn z(&self) -> &Grid2 {
        &self.z
    }

    /// Number of samples per axis.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.u.len()
    }

    /// Spacing between consecutive `u` samples, read from the stored
    /// sequence rather than recomputed from the domain extent.
    #[must_use]
    pub fn step_u(&self) -> f64 {
        self.u[1] - self.u[0]
    }

    /// Spacing between consecutive `v` samples.
    #[must_use]
    pub fn step_v(&self) -> f64 {
        self.v[1] - self.v[0]
    }

    /// Computes the six partial derivative fields by finite differences,
    /// using the mesh's own sample spacings as the step sizes.
    #[must_use]
    pub fn partials(&self) -> Partials {
        let du = self.step_u();
        let dv = self.step_v();
        Partials {
            xu: partial(&self.x, du, Axis::U),
            yu: partial(&self.y, du, Axis::U),
            zu: partial(&self.z, du, Axis::U),
            xv: partial(&self.x, dv, Axis::V),
            yv: partial(&self.y, dv, Axis::V),
            zv: partial(&self.z, dv, Axis::V),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::MobiusStrip;
    use crate::math::TOLERANCE;
    use std::f64::consts::TAU;

    fn meshed(n: usize) -> SurfaceMesh {
        let strip = MobiusStrip::new(1.0, 0.3).unwrap();
        SurfaceMesh::sample(&strip, n).unwrap()
    }

    #[test]
    fn dimensions_match_resolution() {
        let mesh = meshed(11);
        assert_eq!(mesh.resolution(), 11);
        assert_eq!(mesh.u().len(), 11);
        assert_eq!(mesh.v().len(), 11);
        assert_eq!(mesh.x().rows(), 11);
        assert_eq!(mesh.x().cols(), 11);
        assert_eq!(mesh.y().rows(), 11);
        assert_eq!(mesh.z().cols(), 11);
    }

    #[test]
    fn parameter_sequences_span_the_domain() {
        let mesh = meshed(11);
        assert!(mesh.u()[0].abs() < TOLERANCE);
        assert!((mesh.u()[10] - TAU).abs() < 1e-12);
        assert!((mesh.v()[0] + 0.15).abs() < 1e-12);
        assert!((mesh.v()[10] - 0.15).abs() < 1e-12);
    }

    #[test]
    fn steps_come_from_the_stored_sequences() {
        let mesh = meshed(11);
        assert!((mesh.step_u() - (mesh.u()[1] - mesh.u()[0])).abs() < f64::EPSILON);
        assert!((mesh.step_u() - TAU / 10.0).abs() < 1e-12);
        assert!((mesh.step_v() - 0.03).abs() < 1e-12);
    }

    #[test]
    fn seam_closes_through_the_half_twist() {
        // The stored grid point at (u=0, v) must coincide with the one at
        // (u=2*pi, -v): single-sidedness expressed in the discrete mesh.
        let n = 9;
        let mesh = meshed(n);
        for row in 0..n {
            let flipped = n - 1 - row;
            let du = (mesh.x().get(row, 0) - mesh.x().get(flipped, n - 1)).abs();
            let dy = (mesh.y().get(row, 0) - mesh.y().get(flipped, n - 1)).abs();
            let dz = (mesh.z().get(row, 0) - mesh.z().get(flipped, n - 1)).abs();
            assert!(du < 1e-9 && dy < 1e-9 && dz < 1e-9, "seam open at row {row}");
        }
    }

    #[test]
    fn partials_have_mesh_shape() {
        let mesh = meshed(7);
        let p = mesh.partials();
        assert_eq!(p.xu.rows(), 7);
        assert_eq!(p.xu.cols(), 7);
        assert_eq!(p.zv.rows(), 7);
        assert_eq!(p.zv.cols(), 7);
    }

    #[test]
    fn center_line_u_tangent_matches_analytic_derivative() {
        // Along v=0 the surface is the circle (R cos u, R sin u, 0), whose
        // u-derivative has norm R everywhere.
        let n = 201;
        let mesh = meshed(n);
        let p = mesh.partials();
        let mid = n / 2;
        let t = p.tangent_u(mid, 50);
        assert!((t.norm() - 1.0).abs() < 1e-3, "got {}", t.norm());
    }

    #[test]
    fn v_tangent_is_unit_across_the_width() {
        // dP/dv = (cos(u/2) cos u, cos(u/2) sin u, sin(u/2)) has norm 1, and
        // is linear in v, so even the one-sided differences are exact.
        let n = 51;
        let mesh = meshed(n);
        let p = mesh.partials();
        for row in [0, n / 2, n - 1] {
            for col in [0, n / 3, n - 1] {
                let t = p.tangent_v(row, col);
                assert!((t.norm() - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn rejects_insufficient_resolution() {
        let strip = MobiusStrip::new(1.0, 0.3).unwrap();
        assert!(SurfaceMesh::sample(&strip, 0).is_err());
        assert!(SurfaceMesh::sample(&strip, 1).is_err());
        assert!(SurfaceMesh::sample(&strip, 2).is_ok());
    }
}
