use thiserror::Error;

/// Top-level error type for face grouping and selection.
#[derive(Debug, Error)]
pub enum FaceGroupError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate face (triangle {triangle:?}): zero area")]
    DegenerateFace { triangle: Option<usize> },
}

/// Errors related to the face store.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors raised while reading triangles out of a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("vertex index {index} is out of range for {len} vertices")]
    VertexIndexOutOfRange { index: usize, len: usize },

    #[error("triangle {index} is out of range for {count} triangles")]
    TriangleOutOfRange { index: usize, count: usize },

    #[error("vertex soup of length {0} is not a whole number of triangles")]
    IncompleteTriangle(usize),
}

/// Errors related to the selection session and boundary condition lists.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("no selection mode is active")]
    Idle,

    #[error("boundary condition {index} is out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for results using [`FaceGroupError`].
pub type Result<T> = std::result::Result<T, FaceGroupError>;
