use tracing::{debug, warn};

use crate::error::{FaceGroupError, GeometryError, Result};
use crate::math::Vector3;
use crate::mesh::TriangleMesh;
use crate::topology::{FaceData, FaceId, FaceStore};

use super::DegeneratePolicy;

/// Reads every triangle of a mesh into the face store.
pub struct FlattenMesh<'a> {
    mesh: &'a TriangleMesh,
    policy: DegeneratePolicy,
}

impl<'a> FlattenMesh<'a> {
    /// Creates a new `FlattenMesh` operation with the default policy.
    #[must_use]
    pub fn new(mesh: &'a TriangleMesh) -> Self {
        Self {
            mesh,
            policy: DegeneratePolicy::default(),
        }
    }

    /// Sets how zero-area triangles are handled.
    #[must_use]
    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Executes the operation, returning the new face IDs in triangle order.
    ///
    /// Each face's `source` is its triangle index in the mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh is malformed, or if a triangle is
    /// degenerate under [`DegeneratePolicy::Reject`].
    pub fn execute(&self, store: &mut FaceStore) -> Result<Vec<FaceId>> {
        let count = self.mesh.triangle_count()?;
        let mut ids = Vec::with_capacity(count);
        let mut skipped = 0usize;

        for index in 0..count {
            let points = self.mesh.triangle(index)?;
            match FaceData::from_triangle(points, index) {
                Ok(face) => ids.push(store.add_face(face)),
                Err(FaceGroupError::Geometry(GeometryError::DegenerateFace { .. })) => {
                    match self.policy {
                        DegeneratePolicy::Skip => {
                            warn!(triangle = index, "skipping degenerate triangle");
                            skipped += 1;
                        }
                        DegeneratePolicy::Reject => {
                            return Err(GeometryError::DegenerateFace {
                                triangle: Some(index),
                            }
                            .into());
                        }
                        DegeneratePolicy::Substitute => {
                            let face = FaceData::with_normal(points, Vector3::zeros(), Some(index));
                            ids.push(store.add_face(face));
                        }
                    }
                }
                Err(err) => return Err(err),
            }
        }

        debug!(faces = ids.len(), skipped, "flattened mesh");
        Ok(ids)
    }
}
