use crate::error::MeshError;
use crate::math::Point3;

/// A triangle mesh as handed over by the host application.
///
/// With an empty `indices` array the vertex array is a triangle soup:
/// triangle `i` is made of vertices `3i`, `3i + 1`, `3i + 2`.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Creates an indexed mesh.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, indices: Vec<[u32; 3]>) -> Self {
        Self { vertices, indices }
    }

    /// Creates a triangle soup from consecutive vertex triples.
    #[must_use]
    pub fn soup(vertices: Vec<Point3>) -> Self {
        Self {
            vertices,
            indices: Vec::new(),
        }
    }

    /// Returns `true` if the mesh uses an index array.
    #[must_use]
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Number of triangles.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IncompleteTriangle`] if a soup's vertex count is
    /// not a multiple of three.
    pub fn triangle_count(&self) -> Result<usize, MeshError> {
        if self.is_indexed() {
            return Ok(self.indices.len());
        }
        if self.vertices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle(self.vertices.len()));
        }
        Ok(self.vertices.len() / 3)
    }

    /// Resolves the vertices of triangle `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is past the last triangle or the index
    /// array references a missing vertex.
    pub fn triangle(&self, index: usize) -> Result<[Point3; 3], MeshError> {
        let count = self.triangle_count()?;
        if index >= count {
            return Err(MeshError::TriangleOutOfRange { index, count });
        }

        if self.is_indexed() {
            let [i0, i1, i2] = self.indices[index];
            Ok([self.vertex(i0 as usize)?, self.vertex(i1 as usize)?, self.vertex(i2 as usize)?])
        } else {
            let base = index * 3;
            Ok([self.vertices[base], self.vertices[base + 1], self.vertices[base + 2]])
        }
    }

    fn vertex(&self, index: usize) -> Result<Point3, MeshError> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(MeshError::VertexIndexOutOfRange {
                index,
                len: self.vertices.len(),
            })
    }
}
