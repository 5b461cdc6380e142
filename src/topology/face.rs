use crate::error::{GeometryError, Result};
use crate::geometry::{triangle_area, triangle_centroid, triangle_normal};
use crate::math::{Point3, Vector3};

slotmap::new_key_type! {
    /// Unique identifier for a face in the face store.
    pub struct FaceId;
}

/// A triangle together with its derived normal.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceData {
    /// The three vertices, in winding order.
    pub points: [Point3; 3],
    /// Unit normal following the winding of `points`.
    pub normal: Vector3,
    /// Triangle index in the mesh the face was read from, if any.
    ///
    /// Never read by grouping or selection.
    pub source: Option<usize>,
}

impl FaceData {
    /// Creates a face, computing its normal from the vertex winding.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateFace`] if the triangle has zero area.
    pub fn new(points: [Point3; 3]) -> Result<Self> {
        let normal = triangle_normal(&points[0], &points[1], &points[2])?;
        Ok(Self {
            points,
            normal,
            source: None,
        })
    }

    /// Creates a face from a mesh triangle, tagging it with its index.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateFace`] carrying `index` if the
    /// triangle has zero area.
    pub fn from_triangle(points: [Point3; 3], index: usize) -> Result<Self> {
        let normal = triangle_normal(&points[0], &points[1], &points[2])
            .map_err(|_| GeometryError::DegenerateFace { triangle: Some(index) })?;
        Ok(Self {
            points,
            normal,
            source: Some(index),
        })
    }

    /// Creates a face with an explicit normal, skipping the computation.
    #[must_use]
    pub fn with_normal(points: [Point3; 3], normal: Vector3, source: Option<usize>) -> Self {
        Self {
            points,
            normal,
            source,
        }
    }

    /// Average of the three vertices.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        let [a, b, c] = &self.points;
        triangle_centroid(a, b, c)
    }

    /// Triangle area.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [a, b, c] = &self.points;
        triangle_area(a, b, c)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FaceGroupError;

    #[test]
    fn degenerate_triangle_reports_its_index() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let err = FaceData::from_triangle([p, p, Point3::origin()], 7).unwrap_err();
        assert!(matches!(
            err,
            FaceGroupError::Geometry(GeometryError::DegenerateFace { triangle: Some(7) })
        ));
    }

    #[test]
    fn source_is_recorded() {
        let face = FaceData::from_triangle(
            [Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0)],
            3,
        )
        .unwrap();
        assert_eq!(face.source, Some(3));
        assert!((face.normal - -Vector3::y()).norm() < 1e-12);
    }
}
