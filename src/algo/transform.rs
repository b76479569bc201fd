//! Whole-mesh centering and scale normalization.

use crate::error::{GeomError, Result};
use crate::mesh::Mesh;

/// Translate the mesh so the midpoint of its axis-aligned bounding box lands
/// on the origin. A mesh with no vertices is left untouched.
///
/// # Example
///
/// ```
/// use sliver::algo::transform::center;
/// use sliver::mesh::Mesh;
/// use nalgebra::Point3;
///
/// let mut mesh = Mesh::new();
/// mesh.vertices = vec![Point3::new(1.0, 1.0, 1.0), Point3::new(3.0, 1.0, 1.0)];
/// center(&mut mesh);
/// assert_eq!(mesh.vertices[0], Point3::new(-1.0, 0.0, 0.0));
/// ```
pub fn center(mesh: &mut Mesh) {
    let Some((min, max)) = mesh.bounding_box() else {
        return;
    };
    let midpoint = nalgebra::center(&min, &max);

    for vertex in &mut mesh.vertices {
        vertex.coords -= midpoint.coords;
    }
}

/// Scale the mesh so the farthest vertex from the origin sits at distance 1.
///
/// Usually preceded by [`center`]. Fails with
/// [`GeomError::DegenerateGeometry`] when every vertex is at the origin (or
/// the mesh is empty): the scale factor would be a division by zero.
pub fn normalize_radius(mesh: &mut Mesh) -> Result<()> {
    let radius = mesh
        .vertices
        .iter()
        .map(|v| v.coords.norm())
        .fold(0.0, f64::max);

    if radius <= 0.0 {
        return Err(GeomError::degenerate(
            "all vertices at the origin, radius normalization undefined",
        ));
    }

    let inv = 1.0 / radius;
    for vertex in &mut mesh.vertices {
        vertex.coords *= inv;
    }

    Ok(())
}
