use crate::error::Result;
use crate::geometry::shared_point_count;
use crate::math::{points_equal, vectors_equal, ComparisonParams, Point3, Vector3};

use super::{FaceData, FaceId, FaceStore};

/// A connected, coplanar set of faces grown from a seed.
///
/// `normal` is the seed's normal. `points` is the merged vertex set of all
/// members with duplicates removed; incremental grouping tests new faces for
/// adjacency against it, pairing each vertex with at most one group point.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceGroup {
    /// Member faces, seed first.
    pub faces: Vec<FaceId>,
    /// Normal shared by every member.
    pub normal: Vector3,
    /// Distinct vertices of all members.
    pub points: Vec<Point3>,
}

impl FaceGroup {
    /// Starts a singleton group from `seed`.
    #[must_use]
    pub fn from_seed(id: FaceId, seed: &FaceData, params: ComparisonParams) -> Self {
        let mut group = Self {
            faces: Vec::new(),
            normal: seed.normal,
            points: Vec::with_capacity(3),
        };
        group.push(id, seed, params);
        group
    }

    /// Adds a face to the group and merges its vertices into the point set.
    pub fn push(&mut self, id: FaceId, face: &FaceData, params: ComparisonParams) {
        self.faces.push(id);
        for p in &face.points {
            if !self.points.iter().any(|q| points_equal(p, q, params)) {
                self.points.push(*p);
            }
        }
    }

    /// Returns `true` if `face` shares at least two vertices with the group
    /// and has the group's normal.
    #[must_use]
    pub fn accepts(&self, face: &FaceData, params: ComparisonParams) -> bool {
        vectors_equal(&face.normal, &self.normal, params)
            && shared_point_count(&face.points, &self.points, params) >= 2
    }

    /// Number of member faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns `true` if `id` is a member.
    #[must_use]
    pub fn contains(&self, id: FaceId) -> bool {
        self.faces.contains(&id)
    }

    /// Centroid of the distinct vertices, or the origin for an empty group.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn center(&self) -> Point3 {
        if self.points.is_empty() {
            return Point3::origin();
        }
        let sum = self
            .points
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords);
        Point3::from(sum / self.points.len() as f64)
    }

    /// Total area of the member triangles.
    ///
    /// # Errors
    ///
    /// Returns an error if a member is not in `store`.
    pub fn area(&self, store: &FaceStore) -> Result<f64> {
        let mut total = 0.0;
        for &id in &self.faces {
            total += store.face(id)?.area();
        }
        Ok(total)
    }
}
