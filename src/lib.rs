//! # Sliver
//!
//! Parametric curve evaluation and polygon mesh processing.
//!
//! Sliver provides a compact face-vertex mesh representation with a small
//! set of classic geometry-processing algorithms, plus evaluators for three
//! parametric curve families over 2D control points.
//!
//! ## Features
//!
//! - **Curves**: Bézier, Lagrange, and uniform quadratic B-spline sampling,
//!   all via bottom-up basis-weight tables
//! - **Mesh algorithms**: Laplacian smoothing, ear-clipping triangulation,
//!   Gaussian perturbation, centering and radius normalization
//! - **Measurement**: surface area (Heron's formula) and signed volume
//! - **Text I/O**: an OBJ-like mesh format with lossless round-tripping,
//!   and a paired point-cloud format
//!
//! ## Quick Start
//!
//! ```
//! use sliver::prelude::*;
//!
//! let mut mesh = sliver::io::obj::parse("
//!     v 0 0 0
//!     v 1 0 0
//!     v 1 1 0
//!     v 0 1 0
//!     f 1 2 3 4
//! ").unwrap();
//!
//! // Split the quad into triangles, then measure it.
//! triangulate(&mut mesh);
//! assert_eq!(mesh.num_faces(), 2);
//! assert!((surface_area(&mesh).unwrap() - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Sampling Curves
//!
//! ```
//! use sliver::curve::{Curve, CurveKind};
//! use nalgebra::Point2;
//!
//! let curve = Curve::new(
//!     CurveKind::Bezier,
//!     vec![
//!         Point2::new(0.0, 0.0),
//!         Point2::new(1.0, 2.0),
//!         Point2::new(2.0, 0.0),
//!     ],
//! )
//! .unwrap();
//!
//! // Lazy: points are evaluated as the iterator is driven.
//! for point in curve.sample(64).unwrap() {
//!     assert!(point.y <= 1.0);
//! }
//! ```
//!
//! ## Concurrency
//!
//! Everything runs synchronously. Mutating algorithms take `&mut Mesh`, so
//! the borrow checker enforces that only one algorithm touches a mesh at a
//! time; independent [`curve::Curve`] values share no state and can be
//! sampled from any number of threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod curve;
pub mod error;
pub mod io;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use sliver::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::{
        center, gaussian_noise, laplacian_smooth, normalize_radius, surface_area, triangulate,
        volume, SmoothOptions,
    };
    pub use crate::curve::{Curve, CurveKind};
    pub use crate::error::{GeomError, Result};
    pub use crate::mesh::{AdjacencyGraph, Face, FaceVertex, Mesh};
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::Point3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // End-to-end pass over one mesh: parse, clean up, perturb, measure.
    #[test]
    fn pipeline_on_a_textual_cube() {
        let source = "\
v -1 -1 -1
v 1 -1 -1
v -1 1 -1
v 1 1 -1
v -1 -1 1
v 1 -1 1
v -1 1 1
v 1 1 1
f 1 3 4 2
f 5 6 8 7
f 1 2 6 5
f 3 7 8 4
f 1 5 7 3
f 2 4 8 6
";
        let mut mesh = crate::io::obj::parse(source).unwrap();
        assert_eq!(mesh.num_vertices(), 8);
        assert_eq!(mesh.num_faces(), 6);

        triangulate(&mut mesh);
        assert_eq!(mesh.num_faces(), 12);

        // 2x2x2 cube.
        assert!((surface_area(&mesh).unwrap() - 24.0).abs() < 1e-9);
        assert!((volume(&mesh).unwrap() - 8.0).abs() < 1e-9);

        center(&mut mesh);
        normalize_radius(&mut mesh).unwrap();
        let radius = mesh
            .vertices
            .iter()
            .map(|v| v.coords.norm())
            .fold(0.0, f64::max);
        assert!((radius - 1.0).abs() < 1e-12);

        laplacian_smooth(&mut mesh, &SmoothOptions::default().with_alpha(0.9));
        gaussian_noise(&mut mesh, 0.01, &mut StdRng::seed_from_u64(3)).unwrap();
        assert!(mesh.validate().is_ok());

        // Still round-trippable after processing.
        let text = crate::io::obj::to_text(&mesh).unwrap();
        let reparsed = crate::io::obj::parse(&text).unwrap();
        assert_eq!(reparsed.vertices, mesh.vertices);
        assert_eq!(reparsed.faces, mesh.faces);
    }

    #[test]
    fn adjacency_matches_cube_topology() {
        let mut mesh = Mesh::new();
        mesh.vertices = vec![Point3::origin(); 4];
        mesh.faces = vec![Face::from_vertices(&[0, 1, 2, 3])];

        let graph = mesh.adjacency();
        assert_eq!(graph.degree(0), 2);
        assert!(graph.neighbors(0).eq([1, 3]));
    }
}
