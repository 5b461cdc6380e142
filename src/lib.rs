pub mod error;
pub mod geometry;
pub mod math;
pub mod mesh;
pub mod operations;
pub mod selection;
pub mod topology;

pub use error::{FaceGroupError, Result};
