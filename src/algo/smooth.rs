//! Laplacian mesh smoothing.
//!
//! Blends each vertex with the mean of its adjacency-graph neighbors:
//! `new = alpha · old + (1 - alpha) · mean(neighbors)`. With `alpha = 1`
//! the operation is the identity; with `alpha = 0` every vertex jumps to
//! its neighbor centroid.
//!
//! # Example
//!
//! ```
//! use sliver::algo::smooth::{laplacian_smooth, SmoothOptions};
//! use sliver::mesh::{Face, Mesh};
//! use nalgebra::Point3;
//!
//! let mut mesh = Mesh::new();
//! mesh.vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! mesh.faces = vec![Face::from_vertices(&[0, 1, 2])];
//!
//! let options = SmoothOptions::default().with_alpha(0.8).with_iterations(3);
//! laplacian_smooth(&mut mesh, &options);
//! ```

use log::warn;
use nalgebra::{Point3, Vector3};

use crate::mesh::Mesh;

/// Options for Laplacian smoothing.
#[derive(Debug, Clone)]
pub struct SmoothOptions {
    /// Weight of the original position (0.0 to 1.0). Lower values smooth
    /// more aggressively.
    pub alpha: f64,

    /// Number of smoothing iterations.
    pub iterations: usize,
}

impl Default for SmoothOptions {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            iterations: 1,
        }
    }
}

impl SmoothOptions {
    /// Create options with the specified alpha value.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Create options with the specified number of iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

/// Performs Laplacian smoothing on a mesh, in place.
///
/// Each iteration rebuilds the adjacency graph from the current faces, then
/// computes every new position from the previous iteration's positions and
/// swaps the whole vertex collection in at once, so no vertex ever reads a
/// half-updated neighbor.
///
/// A vertex with no neighbors (not referenced by any face edge) uses the
/// zero vector as its neighbor mean, so it drifts toward the origin by
/// `1 - alpha` per iteration. That is reported through [`log::warn`] and is
/// not an error.
pub fn laplacian_smooth(mesh: &mut Mesh, options: &SmoothOptions) {
    if options.iterations == 0 || options.alpha >= 1.0 {
        return;
    }

    for iteration in 0..options.iterations {
        // Rebuilt every iteration: faces could have changed between calls,
        // and at the expected mesh sizes incremental maintenance is not
        // worth the bookkeeping.
        let graph = mesh.adjacency();

        let new_positions: Vec<Point3<f64>> = mesh
            .vertices
            .iter()
            .enumerate()
            .map(|(v, old)| {
                let degree = graph.degree(v);
                let mean = if degree == 0 {
                    if iteration == 0 {
                        warn!("vertex {v} has no neighbors, smoothing it toward the origin");
                    }
                    Vector3::zeros()
                } else {
                    graph
                        .neighbors(v)
                        .map(|n| mesh.vertices[n].coords)
                        .sum::<Vector3<f64>>()
                        / degree as f64
                };
                Point3::from(options.alpha * old.coords + (1.0 - options.alpha) * mean)
            })
            .collect();

        mesh.vertices = new_positions;
    }
}
