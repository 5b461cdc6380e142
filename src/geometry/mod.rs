pub mod predicates;
pub mod triangle;

pub use predicates::{is_coplanar, is_jointed, shared_point_count, shared_vertex_count};
pub use triangle::{triangle_area, triangle_centroid, triangle_normal};
