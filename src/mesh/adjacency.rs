//! Vertex adjacency derived from face loops.

use std::collections::BTreeSet;

use super::model::Face;

/// Neighbor sets for every vertex, derived from shared face edges.
///
/// One entry per vertex index; entry `v` holds the vertices adjacent to `v`
/// through some face loop (both the next and the previous corner, with
/// wrap-around). The relation is symmetric by construction and deduplicated
/// by the set representation. The graph never outlives the faces it was
/// built from: after mutating [`crate::mesh::Mesh::faces`], rebuild it.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    neighbors: Vec<BTreeSet<usize>>,
}

impl AdjacencyGraph {
    /// Build the graph for `num_vertices` vertices from the given faces.
    ///
    /// Each corner of every face is connected to its predecessor and
    /// successor in the loop. Face indices are assumed in range (the mesh
    /// invariant checked by [`crate::mesh::Mesh::validate`]).
    pub fn from_faces(num_vertices: usize, faces: &[Face]) -> Self {
        let mut neighbors = vec![BTreeSet::new(); num_vertices];

        for face in faces {
            let len = face.corners.len();
            for (i, corner) in face.corners.iter().enumerate() {
                let prev = face.corners[(i + len - 1) % len].vertex;
                let next = face.corners[(i + 1) % len].vertex;
                neighbors[corner.vertex].insert(prev);
                neighbors[corner.vertex].insert(next);
            }
        }

        // A corner can be its own loop neighbor only in degenerate faces;
        // a vertex is never adjacent to itself.
        for (v, set) in neighbors.iter_mut().enumerate() {
            set.remove(&v);
        }

        Self { neighbors }
    }

    /// Number of vertices the graph was built for.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Number of neighbors of vertex `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors[v].len()
    }

    /// Iterator over the neighbors of vertex `v`, in ascending index order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors[v].iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_loop_neighbors_wrap_around() {
        let faces = vec![Face::from_vertices(&[0, 1, 2, 3])];
        let graph = AdjacencyGraph::from_faces(4, &faces);

        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(graph.neighbors(3).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn relation_is_symmetric() {
        let faces = vec![
            Face::from_vertices(&[0, 1, 2]),
            Face::from_vertices(&[1, 3, 2]),
        ];
        let graph = AdjacencyGraph::from_faces(4, &faces);

        for v in 0..graph.len() {
            for n in graph.neighbors(v) {
                assert!(graph.neighbors(n).any(|back| back == v));
            }
        }
    }

    #[test]
    fn shared_edges_are_deduplicated() {
        // Edge (1, 2) appears in both faces; it must count once.
        let faces = vec![
            Face::from_vertices(&[0, 1, 2]),
            Face::from_vertices(&[1, 3, 2]),
        ];
        let graph = AdjacencyGraph::from_faces(4, &faces);
        assert_eq!(graph.degree(1), 3);
        assert_eq!(graph.degree(3), 2);
    }

    #[test]
    fn unreferenced_vertex_has_no_neighbors() {
        let faces = vec![Face::from_vertices(&[0, 1, 2])];
        let graph = AdjacencyGraph::from_faces(5, &faces);
        assert_eq!(graph.degree(3), 0);
        assert_eq!(graph.degree(4), 0);
    }
}
