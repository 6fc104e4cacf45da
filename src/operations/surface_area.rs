use crate::geometry::SurfaceMesh;
use crate::math::quadrature::simpson_uniform;

/// Computes the total surface area of a sampled surface.
///
/// At each grid point the two finite-difference tangent vectors are
/// crossed to obtain the local area-scaling factor `|T_u x T_v|` (the
/// Jacobian magnitude of the parametrization); that scalar field is then
/// integrated over the parameter domain with nested composite Simpson
/// quadrature, across `v` at each fixed `u` first, then along `u`.
///
/// Accuracy improves with the mesh resolution; no convergence check is
/// performed.
pub struct SurfaceArea<'a> {
    mesh: &'a SurfaceMesh,
}

impl<'a> SurfaceArea<'a> {
    /// Creates a new `SurfaceArea` query over a sampled mesh.
    #[must_use]
    pub fn new(mesh: &'a SurfaceMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning the total surface area.
    ///
    /// Pure: repeated calls on the same mesh return bit-identical values.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let partials = self.mesh.partials();
        let n = self.mesh.resolution();
        let step_u = self.mesh.step_u();
        let step_v = self.mesh.step_v();

        // Inner pass: integrate the scaling factor across v at each fixed u.
        let mut per_u = Vec::with_capacity(n);
        for col in 0..n {
            let column: Vec<f64> = (0..n)
                .map(|row| {
                    let tu = partials.tangent_u(row, col);
                    let tv = partials.tangent_v(row, col);
                    tu.cross(&tv).norm()
                })
                .collect();
            per_u.push(simpson_uniform(&column, step_v));
        }

        simpson_uniform(&per_u, step_u)
    }
}
