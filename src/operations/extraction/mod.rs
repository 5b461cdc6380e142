mod flatten_mesh;
mod pick_face;

pub use flatten_mesh::FlattenMesh;
pub use pick_face::{find_by_source, PickFace};

/// What to do with zero-area triangles while reading a mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Leave the triangle out and log a warning.
    #[default]
    Skip,
    /// Fail the whole operation.
    Reject,
    /// Keep the triangle with a zero normal. It is only ever coplanar with
    /// other substituted faces.
    Substitute,
}
