use tracing::debug;

use crate::error::Result;
use crate::mesh::TriangleMesh;
use crate::topology::{FaceData, FaceId, FaceStore};

/// Resolves the single triangle a user picked to a face in the store.
///
/// A face already read from the same triangle (for example by
/// [`FlattenMesh`](super::FlattenMesh)) is reused, so a pick never puts a
/// second copy of a triangle into the store.
pub struct PickFace<'a> {
    mesh: &'a TriangleMesh,
    triangle: usize,
}

impl<'a> PickFace<'a> {
    /// Creates a new `PickFace` operation for triangle `triangle` of `mesh`.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh, triangle: usize) -> Self {
        Self { mesh, triangle }
    }

    /// Executes the operation, returning the existing face for the triangle
    /// or inserting a new one.
    ///
    /// # Errors
    ///
    /// Returns an error if the triangle does not exist or is degenerate.
    pub fn execute(&self, store: &mut FaceStore) -> Result<FaceId> {
        let points = self.mesh.triangle(self.triangle)?;
        let existing = store
            .iter()
            .find(|(_, face)| face.source == Some(self.triangle) && face.points == points)
            .map(|(id, _)| id);
        if let Some(id) = existing {
            debug!(triangle = self.triangle, "picked existing face");
            return Ok(id);
        }

        let face = FaceData::from_triangle(points, self.triangle)?;
        debug!(triangle = self.triangle, normal = ?face.normal, "picked face");
        Ok(store.add_face(face))
    }
}

/// Finds the face in `store` that was read from mesh triangle `triangle`.
#[must_use]
pub fn find_by_source(store: &FaceStore, triangle: usize) -> Option<FaceId> {
    store
        .iter()
        .find(|(_, face)| face.source == Some(triangle))
        .map(|(id, _)| id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{FaceGroupError, MeshError};
    use crate::math::Point3;
    use crate::operations::extraction::FlattenMesh;

    fn mesh() -> TriangleMesh {
        TriangleMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            vec![[0, 1, 2], [0, 3, 1]],
        )
    }

    #[test]
    fn picks_indexed_triangle() {
        let mesh = mesh();
        let mut store = FaceStore::new();
        let id = PickFace::new(&mesh, 1).execute(&mut store).unwrap();
        let face = store.face(id).unwrap();
        assert_eq!(face.source, Some(1));
        assert_eq!(face.points[1], Point3::new(0.0, 0.0, 1.0));
        assert_eq!(find_by_source(&store, 1), Some(id));
        assert_eq!(find_by_source(&store, 0), None);
    }

    #[test]
    fn pick_after_flatten_reuses_face() {
        let mesh = mesh();
        let mut store = FaceStore::new();
        let ids = FlattenMesh::new(&mesh).execute(&mut store).unwrap();

        let picked = PickFace::new(&mesh, 1).execute(&mut store).unwrap();
        assert_eq!(picked, ids[1]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn repeated_pick_reuses_face() {
        let mesh = mesh();
        let mut store = FaceStore::new();
        let first = PickFace::new(&mesh, 0).execute(&mut store).unwrap();
        let second = PickFace::new(&mesh, 0).execute(&mut store).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn same_index_from_other_mesh_is_not_reused() {
        let mesh = mesh();
        let mut store = FaceStore::new();
        let first = PickFace::new(&mesh, 0).execute(&mut store).unwrap();

        let shifted = TriangleMesh::new(
            mesh.vertices.iter().map(|p| p + crate::math::Vector3::x()).collect(),
            mesh.indices.clone(),
        );
        let second = PickFace::new(&shifted, 0).execute(&mut store).unwrap();
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_triangle_is_an_error() {
        let mesh = mesh();
        let mut store = FaceStore::new();
        let result = PickFace::new(&mesh, 2).execute(&mut store);
        assert!(matches!(
            result,
            Err(FaceGroupError::Mesh(MeshError::TriangleOutOfRange { index: 2, count: 2 }))
        ));
    }
}
