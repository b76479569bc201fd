//! Face-vertex mesh storage.

use nalgebra::{Point2, Point3, Vector3};

use crate::error::{GeomError, Result};

use super::adjacency::AdjacencyGraph;

/// One vertex-use inside a face: a vertex index plus optional texture
/// coordinate and normal indices.
///
/// All indices are 0-based internally; the text codec converts from the
/// 1-based form on the wire. The optional attributes belong to this
/// particular use of the vertex, not to the vertex itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVertex {
    /// Index into [`Mesh::vertices`].
    pub vertex: usize,
    /// Index into [`Mesh::texcoords`], if present.
    pub texcoord: Option<usize>,
    /// Index into [`Mesh::normals`], if present.
    pub normal: Option<usize>,
}

impl FaceVertex {
    /// A vertex-use with both optional attributes present.
    pub fn new(vertex: usize, texcoord: Option<usize>, normal: Option<usize>) -> Self {
        Self {
            vertex,
            texcoord,
            normal,
        }
    }

    /// A bare vertex-use with no texture coordinate or normal.
    pub fn position(vertex: usize) -> Self {
        Self::new(vertex, None, None)
    }
}

/// A polygonal face: an ordered loop of at least three vertex-uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    /// The face's vertex loop, in winding order.
    pub corners: Vec<FaceVertex>,
}

impl Face {
    /// Create a face from its corner loop.
    pub fn new(corners: Vec<FaceVertex>) -> Self {
        Self { corners }
    }

    /// Create a face from bare vertex indices.
    pub fn from_vertices(indices: &[usize]) -> Self {
        Self::new(indices.iter().map(|&i| FaceVertex::position(i)).collect())
    }

    /// Number of corners in the loop.
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    /// Whether the loop is empty.
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// Whether the face is a triangle.
    pub fn is_triangle(&self) -> bool {
        self.corners.len() == 3
    }

    /// Iterator over the bare vertex indices of the loop.
    pub fn vertex_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.corners.iter().map(|c| c.vertex)
    }
}

/// A polygonal mesh stored as parallel collections.
///
/// `vertices`, `normals`, and `texcoords` hold the geometric data; `faces`
/// reference into them by index. The structure is the unit of mutation for
/// every algorithm in [`crate::algo`]: each call replaces the affected
/// collection wholesale at completion, so no partially-updated state is ever
/// observable. Algorithms take `&mut Mesh`, which also makes "one algorithm
/// per mesh at a time" a borrow-checker guarantee rather than a convention.
///
/// # Example
///
/// ```
/// use sliver::mesh::{Face, Mesh};
/// use nalgebra::Point3;
///
/// let mut mesh = Mesh::new();
/// mesh.vertices = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
/// ];
/// mesh.faces = vec![Face::from_vertices(&[0, 1, 2])];
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,
    /// Normal vectors, referenced by [`FaceVertex::normal`].
    pub normals: Vec<Vector3<f64>>,
    /// Texture coordinates, referenced by [`FaceVertex::texcoord`].
    pub texcoords: Vec<Point2<f64>>,
    /// Polygonal faces referencing the collections above.
    pub faces: Vec<Face>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Check the index-range invariant: every index referenced by a face must
    /// be in range of its target collection.
    pub fn validate(&self) -> Result<()> {
        for (fi, face) in self.faces.iter().enumerate() {
            for corner in &face.corners {
                if corner.vertex >= self.vertices.len() {
                    return Err(GeomError::InvalidIndex {
                        face: fi,
                        index: corner.vertex,
                        what: "vertex",
                    });
                }
                if let Some(t) = corner.texcoord {
                    if t >= self.texcoords.len() {
                        return Err(GeomError::InvalidIndex {
                            face: fi,
                            index: t,
                            what: "texcoord",
                        });
                    }
                }
                if let Some(n) = corner.normal {
                    if n >= self.normals.len() {
                        return Err(GeomError::InvalidIndex {
                            face: fi,
                            index: n,
                            what: "normal",
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// The positions of a face's corners, in loop order.
    pub fn face_positions(&self, face: &Face) -> Vec<Point3<f64>> {
        face.vertex_indices().map(|i| self.vertices[i]).collect()
    }

    /// Component-wise min and max over all vertices, or `None` when the mesh
    /// has no vertices.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            min = min.inf(v);
            max = max.sup(v);
        }
        Some((min, max))
    }

    /// Build the vertex adjacency graph implied by the current faces.
    ///
    /// The graph is transient: it reflects the faces at the moment of the
    /// call and is rebuilt from scratch whenever needed.
    pub fn adjacency(&self) -> AdjacencyGraph {
        AdjacencyGraph::from_faces(self.vertices.len(), &self.faces)
    }
}
