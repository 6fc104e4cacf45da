use crate::error::{MobiusError, Result};
use crate::geometry::{MobiusStrip, Surface};
use crate::math::{linspace, Point3};

/// Computes the total boundary length of a Möbius strip.
///
/// Samples the two fixed-`v` boundary curves `v = +w/2` and `v = -w/2`
/// along `u`, independently of any full surface mesh, and sums the
/// polyline arc length of each. Neither polyline is closed back onto its
/// first sample; with endpoint-inclusive `u` sampling the two open arcs
/// meet end to start through the half-twist, so their sum still traces
/// the strip's boundary.
///
/// The true Möbius boundary is a single closed curve traversing both
/// fixed-`v` arcs before returning to its start; it is measured here as
/// two independent arcs and summed, which gives the same total.
pub struct EdgeLength<'a> {
    strip: &'a MobiusStrip,
    samples: usize,
}

impl<'a> EdgeLength<'a> {
    /// Creates a new `EdgeLength` query with `samples` points per curve.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples < 2` (no segment can be formed).
    pub fn new(strip: &'a MobiusStrip, samples: usize) -> Result<Self> {
        if samples < 2 {
            return Err(MobiusError::InsufficientResolution { n: samples });
        }
        Ok(Self { strip, samples })
    }

    /// Executes the query, returning the summed length of both boundary
    /// polylines.
    ///
    /// Pure: repeated calls return bit-identical values.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let domain = self.strip.domain();
        let u = linspace(domain.u_min, domain.u_max, self.samples);
        let half_width = self.strip.width() / 2.0;
        self.arc_length(&u, half_width) + self.arc_length(&u, -half_width)
    }

    fn arc_length(&self, u: &[f64], v: f64) -> f64 {
        let points: Vec<Point3> = u.iter().map(|&ui| self.strip.evaluate(ui, v)).collect();
        points.windows(2).map(|pair| (pair[1] - pair[0]).norm()).sum()
    }
}
