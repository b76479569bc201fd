//! Core mesh data structures.
//!
//! The primary type is [`Mesh`], a face-vertex representation with parallel
//! collections for positions, normals, and texture coordinates, and faces
//! that reference into them. Vertex adjacency is not stored on the mesh;
//! [`AdjacencyGraph`] is derived from the faces whenever an algorithm needs
//! it and discarded afterwards.
//!
//! Meshes are typically produced by [`crate::io::obj`] and processed in
//! place by the functions in [`crate::algo`].

mod adjacency;
mod model;

pub use adjacency::AdjacencyGraph;
pub use model::{Face, FaceVertex, Mesh};
