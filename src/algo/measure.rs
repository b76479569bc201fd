//! Surface-area and volume measurement.
//!
//! Both measurements are defined on triangular faces only; run
//! [`crate::algo::triangulate::triangulate`] first for general polygonal
//! meshes. A non-triangular face is a hard [`UnsupportedFaceShape`] error,
//! not something to silently skip.
//!
//! [`UnsupportedFaceShape`]: crate::error::GeomError::UnsupportedFaceShape

use nalgebra::Point3;

use crate::error::{GeomError, Result};
use crate::mesh::Mesh;

/// Total surface area: the sum of triangle areas via Heron's formula.
///
/// # Example
///
/// ```
/// use sliver::algo::measure::surface_area;
/// use sliver::mesh::{Face, Mesh};
/// use nalgebra::Point3;
///
/// let mut mesh = Mesh::new();
/// mesh.vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ];
/// mesh.faces = vec![Face::from_vertices(&[0, 1, 2])];
/// assert!((surface_area(&mesh).unwrap() - 0.5).abs() < 1e-12);
/// ```
pub fn surface_area(mesh: &Mesh) -> Result<f64> {
    let mut total = 0.0;

    for (fi, face) in mesh.faces.iter().enumerate() {
        let [p0, p1, p2] = triangle_positions(mesh, fi)?;

        let a = (p1 - p0).norm();
        let b = (p2 - p0).norm();
        let c = (p1 - p2).norm();
        let s = (a + b + c) / 2.0;

        // Roundoff can push the radicand a hair below zero for needle
        // triangles; clamp instead of producing NaN.
        total += (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt();
    }

    Ok(total)
}

/// Signed enclosed volume: `Σ (1/6) · a · (b × c)` over all faces, with
/// `a`, `b`, `c` the face's vertices relative to the origin.
///
/// Meaningful only for a closed, consistently-oriented triangular mesh; the
/// sign follows the winding order.
pub fn volume(mesh: &Mesh) -> Result<f64> {
    let mut total = 0.0;

    for fi in 0..mesh.faces.len() {
        let [p0, p1, p2] = triangle_positions(mesh, fi)?;
        total += p0.coords.dot(&p1.coords.cross(&p2.coords));
    }

    Ok(total / 6.0)
}

/// The three corner positions of face `fi`, or an error if it is not a
/// triangle.
fn triangle_positions(mesh: &Mesh, fi: usize) -> Result<[Point3<f64>; 3]> {
    let face = &mesh.faces[fi];
    if !face.is_triangle() {
        return Err(GeomError::UnsupportedFaceShape {
            face: fi,
            len: face.len(),
        });
    }
    Ok([
        mesh.vertices[face.corners[0].vertex],
        mesh.vertices[face.corners[1].vertex],
        mesh.vertices[face.corners[2].vertex],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Face;

    /// Axis-aligned unit cube, outward-wound triangles.
    fn unit_cube() -> Mesh {
        let mut mesh = Mesh::new();
        for z in [0.0, 1.0] {
            for y in [0.0, 1.0] {
                for x in [0.0, 1.0] {
                    mesh.vertices.push(Point3::new(x, y, z));
                }
            }
        }
        // Vertex i = x + 2y + 4z.
        let quads = [
            [0, 2, 3, 1], // bottom (z = 0), normal -z
            [4, 5, 7, 6], // top (z = 1), normal +z
            [0, 1, 5, 4], // front (y = 0), normal -y
            [2, 6, 7, 3], // back (y = 1), normal +y
            [0, 4, 6, 2], // left (x = 0), normal -x
            [1, 3, 7, 5], // right (x = 1), normal +x
        ];
        for q in quads {
            mesh.faces.push(Face::from_vertices(&[q[0], q[1], q[2]]));
            mesh.faces.push(Face::from_vertices(&[q[0], q[2], q[3]]));
        }
        mesh
    }

    #[test]
    fn cube_surface_area_is_six() {
        let mesh = unit_cube();
        assert!((surface_area(&mesh).unwrap() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn cube_volume_is_one() {
        let mesh = unit_cube();
        assert!((volume(&mesh).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn reversed_winding_negates_volume() {
        let mut mesh = unit_cube();
        for face in &mut mesh.faces {
            face.corners.reverse();
        }
        assert!((volume(&mesh).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn right_triangle_area() {
        let mut mesh = Mesh::new();
        mesh.vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 4.0, 0.0),
        ];
        mesh.faces = vec![Face::from_vertices(&[0, 1, 2])];
        assert!((surface_area(&mesh).unwrap() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_triangle_has_zero_area() {
        let mut mesh = Mesh::new();
        mesh.vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        mesh.faces = vec![Face::from_vertices(&[0, 1, 2])];
        let area = surface_area(&mesh).unwrap();
        assert!(area.abs() < 1e-12 && !area.is_nan());
    }

    #[test]
    fn quad_face_is_rejected() {
        let mut mesh = Mesh::new();
        mesh.vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        mesh.faces = vec![Face::from_vertices(&[0, 1, 2, 3])];

        match surface_area(&mesh) {
            Err(GeomError::UnsupportedFaceShape { face: 0, len: 4 }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(volume(&mesh).is_err());
    }
}
