//! Ear-clipping polygon triangulation.
//!
//! Replaces every face of a mesh with triangles. Faces that are already
//! triangles pass through unchanged; larger loops are reduced one ear at a
//! time until three corners remain. Corner attributes (texture coordinate
//! and normal indices) follow their corners into the emitted triangles.
//!
//! The input faces must be simple (non-self-intersecting) polygons; the
//! behavior on self-intersecting or near-collinear loops is unspecified.
//!
//! # Example
//!
//! ```
//! use sliver::algo::triangulate::triangulate;
//! use sliver::mesh::{Face, Mesh};
//! use nalgebra::Point3;
//!
//! let mut mesh = Mesh::new();
//! mesh.vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! mesh.faces = vec![Face::from_vertices(&[0, 1, 2, 3])];
//!
//! triangulate(&mut mesh);
//! assert_eq!(mesh.faces.len(), 2);
//! assert!(mesh.faces.iter().all(|f| f.is_triangle()));
//! ```

use nalgebra::{Point3, Vector3};

use crate::mesh::{Face, FaceVertex, Mesh};

/// Tolerance on the barycentric residual of the containment test and on the
/// convexity sign test.
const EPSILON: f64 = 1e-10;

/// Triangulate every face of the mesh in place.
///
/// The face collection is replaced wholesale at the end of the call; each
/// L-gon contributes `L - 2` triangles in its original winding order.
pub fn triangulate(mesh: &mut Mesh) {
    let mut triangles = Vec::with_capacity(mesh.faces.len());

    for face in &mesh.faces {
        if face.corners.len() <= 3 {
            triangles.push(face.clone());
        } else {
            clip_face(&mesh.vertices, face, &mut triangles);
        }
    }

    mesh.faces = triangles;
}

/// Clip one polygonal loop into triangles, appending them to `out`.
fn clip_face(vertices: &[Point3<f64>], face: &Face, out: &mut Vec<Face>) {
    let mut corners: Vec<FaceVertex> = face.corners.clone();
    let reference = reference_orientation(vertices, &corners);

    while corners.len() > 3 {
        // Convexity is reclassified on every pass; clipping an ear only
        // affects its two former neighbors, but the loop is short enough
        // that recomputing all corners keeps the invariants obvious.
        let convex: Vec<bool> = (0..corners.len())
            .map(|i| is_convex(vertices, &corners, i, &reference))
            .collect();

        let ear = find_ear(vertices, &corners, &convex)
            // A simple polygon always has an ear (two-ears theorem). If the
            // loop violates the precondition, clip the first convex corner
            // anyway so the pass terminates.
            .or_else(|| convex.iter().position(|&c| c))
            .unwrap_or(0);

        let len = corners.len();
        out.push(Face::new(vec![
            corners[(ear + len - 1) % len],
            corners[ear],
            corners[(ear + 1) % len],
        ]));
        corners.remove(ear);
    }

    out.push(Face::new(corners));
}

/// The loop's reference orientation: the sum of all corner cross products.
///
/// For a planar simple polygon this is (twice) its area vector, so every
/// convex corner's cross product points the same way.
fn reference_orientation(vertices: &[Point3<f64>], corners: &[FaceVertex]) -> Vector3<f64> {
    let len = corners.len();
    let mut sum = Vector3::zeros();
    for i in 0..len {
        sum += corner_cross(vertices, corners, i);
    }
    sum
}

/// Cross product of the two edges meeting at corner `i`.
fn corner_cross(vertices: &[Point3<f64>], corners: &[FaceVertex], i: usize) -> Vector3<f64> {
    let len = corners.len();
    let prev = vertices[corners[(i + len - 1) % len].vertex];
    let here = vertices[corners[i].vertex];
    let next = vertices[corners[(i + 1) % len].vertex];
    (here - prev).cross(&(next - here))
}

/// A corner is convex when its cross product agrees in sign with the loop's
/// reference orientation.
fn is_convex(
    vertices: &[Point3<f64>],
    corners: &[FaceVertex],
    i: usize,
    reference: &Vector3<f64>,
) -> bool {
    corner_cross(vertices, corners, i).dot(reference) > EPSILON
}

/// Find a convex corner whose ear triangle contains none of the loop's
/// concave corners.
fn find_ear(vertices: &[Point3<f64>], corners: &[FaceVertex], convex: &[bool]) -> Option<usize> {
    let len = corners.len();

    (0..len).find(|&i| {
        if !convex[i] {
            return false;
        }

        let a = vertices[corners[(i + len - 1) % len].vertex];
        let b = vertices[corners[i].vertex];
        let c = vertices[corners[(i + 1) % len].vertex];

        // An ear is blocked if any concave corner lies strictly inside it.
        (0..len).all(|j| {
            if convex[j] || j == i || j == (i + 1) % len || j == (i + len - 1) % len {
                return true;
            }
            !triangle_contains(&a, &b, &c, &vertices[corners[j].vertex])
        })
    })
}

/// Barycentric point-in-triangle test: inside means `u > 0`, `v > 0`, and
/// `u + v < 1`, each with [`EPSILON`] slack on the residual. The slack is
/// inclusive: a concave corner sitting exactly on an ear's edge still counts
/// as contained, otherwise the clipped triangle overlaps the notch behind it.
fn triangle_contains(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    p: &Point3<f64>,
) -> bool {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;

    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < EPSILON {
        // Degenerate ear triangle cannot contain anything.
        return false;
    }

    let u = (d11 * d20 - d01 * d21) / denom;
    let v = (d00 * d21 - d01 * d20) / denom;

    u > -EPSILON && v > -EPSILON && u + v < 1.0 + EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::measure::surface_area;

    fn planar_mesh(points: &[(f64, f64)]) -> Mesh {
        let mut mesh = Mesh::new();
        mesh.vertices = points
            .iter()
            .map(|&(x, y)| Point3::new(x, y, 0.0))
            .collect();
        mesh.faces = vec![Face::from_vertices(
            &(0..points.len()).collect::<Vec<_>>(),
        )];
        mesh
    }

    #[test]
    fn triangles_pass_through_unchanged() {
        let mut mesh = planar_mesh(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let original = mesh.faces.clone();
        triangulate(&mut mesh);
        assert_eq!(mesh.faces, original);
    }

    #[test]
    fn unit_square_yields_two_half_area_triangles() {
        let mut mesh = planar_mesh(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        triangulate(&mut mesh);

        assert_eq!(mesh.faces.len(), 2);
        for face in mesh.faces.clone() {
            let mut single = mesh.clone();
            single.faces = vec![face];
            assert!((surface_area(&single).unwrap() - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn simple_ngon_yields_n_minus_two_triangles() {
        // Convex octagon.
        let points: Vec<(f64, f64)> = (0..8)
            .map(|k| {
                let angle = std::f64::consts::TAU * k as f64 / 8.0;
                (angle.cos(), angle.sin())
            })
            .collect();
        let mut mesh = planar_mesh(&points);
        let area_before = polygon_area(&points);

        triangulate(&mut mesh);

        assert_eq!(mesh.faces.len(), 6);
        assert!(mesh.faces.iter().all(|f| f.is_triangle()));
        assert!((surface_area(&mesh).unwrap() - area_before).abs() < 1e-9);
    }

    #[test]
    fn concave_polygon_preserves_area() {
        // L-shaped hexagon, area 3.
        let points = [
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ];
        let mut mesh = planar_mesh(&points);

        triangulate(&mut mesh);

        assert_eq!(mesh.faces.len(), 4);
        assert!((surface_area(&mesh).unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn no_emitted_triangle_crosses_the_notch() {
        // Every triangle of the L-shape must stay inside the polygon: the
        // centroid of each must not fall in the cut-away quadrant x>1, y>1.
        let points = [
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ];
        let mut mesh = planar_mesh(&points);
        triangulate(&mut mesh);

        for face in &mesh.faces {
            let positions = mesh.face_positions(face);
            let centroid = (positions[0].coords + positions[1].coords + positions[2].coords) / 3.0;
            assert!(
                !(centroid.x > 1.0 && centroid.y > 1.0),
                "triangle centroid {centroid:?} lies outside the polygon"
            );
        }
    }

    #[test]
    fn corner_attributes_follow_their_corners() {
        let mut mesh = planar_mesh(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        mesh.normals = vec![Vector3::z()];
        for (i, corner) in mesh.faces[0].corners.iter_mut().enumerate() {
            corner.normal = Some(0);
            corner.texcoord = Some(i % 2);
        }
        mesh.texcoords = vec![nalgebra::Point2::new(0.0, 0.0), nalgebra::Point2::new(1.0, 1.0)];

        triangulate(&mut mesh);

        for face in &mesh.faces {
            for corner in &face.corners {
                assert_eq!(corner.normal, Some(0));
                assert_eq!(corner.texcoord, Some(corner.vertex % 2));
            }
        }
    }

    #[test]
    fn mixed_face_arities_are_all_triangulated() {
        let mut mesh = planar_mesh(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        mesh.vertices.push(Point3::new(2.0, 0.0, 0.0));
        mesh.faces.push(Face::from_vertices(&[1, 4, 2]));

        triangulate(&mut mesh);

        assert_eq!(mesh.faces.len(), 3);
        assert!(mesh.faces.iter().all(|f| f.is_triangle()));
    }

    fn polygon_area(points: &[(f64, f64)]) -> f64 {
        let n = points.len();
        let mut twice = 0.0;
        for i in 0..n {
            let (x0, y0) = points[i];
            let (x1, y1) = points[(i + 1) % n];
            twice += x0 * y1 - x1 * y0;
        }
        twice.abs() / 2.0
    }
}
