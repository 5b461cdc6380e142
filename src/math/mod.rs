pub mod compare;

pub use compare::{points_equal, vectors_equal, ComparisonParams};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Smallest sine of the corner angle accepted for a non-degenerate triangle.
pub const TOLERANCE: f64 = 1e-10;
