//! Prints the surface area and boundary length of a reference Möbius strip.

use mobius::geometry::{MobiusStrip, SurfaceMesh};
use mobius::operations::{EdgeLength, SurfaceArea};

fn main() -> mobius::Result<()> {
    let strip = MobiusStrip::new(1.0, 0.3)?;
    let mesh = SurfaceMesh::sample(&strip, 300)?;

    let area = SurfaceArea::new(&mesh).execute();
    let length = EdgeLength::new(&strip, 300)?.execute();

    println!("Surface Area: {area}");
    println!("Edge Length: {length}");
    Ok(())
}
