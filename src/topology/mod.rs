pub mod face;
pub mod group;

pub use face::{FaceData, FaceId};
pub use group::FaceGroup;

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns all faces.
///
/// Groups and selections refer to faces via [`FaceId`] (generational
/// indices). Faces are never removed, so iteration follows insertion order.
#[derive(Debug, Default)]
pub struct FaceStore {
    faces: SlotMap<FaceId, FaceData>,
}

impl FaceStore {
    /// Creates a new, empty face store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a face and returns its ID.
    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is not in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Number of faces in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the store holds no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// All face IDs, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.keys()
    }

    /// All faces with their IDs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceId, &FaceData)> {
        self.faces.iter()
    }
}
