use crate::math::{points_equal, vectors_equal, ComparisonParams, Point3};
use crate::topology::FaceData;

/// Counts the points of `a` that match a point of `b`.
///
/// Matching is one-to-one: each point of `b` pairs with at most one point of
/// `a`, so a single vertex lying within tolerance of two others still counts
/// once.
#[must_use]
pub fn shared_point_count(a: &[Point3], b: &[Point3], params: ComparisonParams) -> usize {
    let mut used = vec![false; b.len()];
    let mut count = 0;
    for p in a {
        if let Some(j) = (0..b.len()).find(|&j| !used[j] && points_equal(p, &b[j], params)) {
            used[j] = true;
            count += 1;
        }
    }
    count
}

/// Number of vertices shared between two faces.
#[must_use]
pub fn shared_vertex_count(a: &FaceData, b: &FaceData, params: ComparisonParams) -> usize {
    shared_point_count(&a.points, &b.points, params)
}

/// Returns `true` if the two faces share at least two vertices.
///
/// This does not require the shared vertices to form a common edge.
#[must_use]
pub fn is_jointed(a: &FaceData, b: &FaceData, params: ComparisonParams) -> bool {
    let mut used = [false; 3];
    let mut matched = 0;
    for p in &a.points {
        if let Some(j) = (0..3).find(|&j| !used[j] && points_equal(p, &b.points[j], params)) {
            used[j] = true;
            matched += 1;
            if matched >= 2 {
                return true;
            }
        }
    }
    false
}

/// Returns `true` if the two faces have component-wise equal normals.
#[must_use]
pub fn is_coplanar(a: &FaceData, b: &FaceData, params: ComparisonParams) -> bool {
    vectors_equal(&a.normal, &b.normal, params)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn face(a: Point3, b: Point3, c: Point3) -> FaceData {
        FaceData::new([a, b, c]).unwrap()
    }

    const EXACT: ComparisonParams = ComparisonParams::EXACT;

    #[test]
    fn identical_faces_are_coplanar_in_any_rotation() {
        let (a, b, c) = (p(0.0, 0.0, 0.0), p(2.0, 0.3, 0.0), p(0.7, 1.9, 0.4));
        let f = face(a, b, c);
        assert!(is_coplanar(&f, &face(a, b, c), EXACT));
        assert!(is_coplanar(&f, &face(b, c, a), ComparisonParams::with_tolerance(1e-12)));
        assert!(is_coplanar(&f, &face(c, a, b), ComparisonParams::with_tolerance(1e-12)));
    }

    #[test]
    fn opposite_winding_is_not_coplanar() {
        let (a, b, c) = (p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        assert!(!is_coplanar(&face(a, b, c), &face(a, c, b), EXACT));
    }

    #[test]
    fn two_shared_points_are_jointed() {
        let f1 = face(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        let f2 = face(p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0, 0.0));
        assert_eq!(shared_vertex_count(&f1, &f2, EXACT), 2);
        assert!(is_jointed(&f1, &f2, EXACT));
    }

    #[test]
    fn one_shared_point_is_not_jointed() {
        let f1 = face(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        let f2 = face(p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0), p(2.0, 1.0, 0.0));
        assert_eq!(shared_vertex_count(&f1, &f2, EXACT), 1);
        assert!(!is_jointed(&f1, &f2, EXACT));
    }

    #[test]
    fn disjoint_faces_share_nothing() {
        let f1 = face(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        let f2 = face(p(5.0, 0.0, 0.0), p(6.0, 0.0, 0.0), p(5.0, 1.0, 0.0));
        assert_eq!(shared_vertex_count(&f1, &f2, EXACT), 0);
        assert!(!is_jointed(&f1, &f2, EXACT));
    }

    #[test]
    fn jointed_within_tolerance() {
        let f1 = face(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        let f2 = face(p(1.0 + 1e-9, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 1.0 - 1e-9, 0.0));
        assert!(!is_jointed(&f1, &f2, EXACT));
        assert!(is_jointed(&f1, &f2, ComparisonParams::with_tolerance(1e-6)));
    }

    #[test]
    fn each_point_matches_once() {
        let a = [p(0.0, 0.0, 0.0)];
        let b = [p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0)];
        assert_eq!(shared_point_count(&a, &b, EXACT), 1);
        assert_eq!(shared_point_count(&b, &a, EXACT), 1);
    }

    #[test]
    fn point_near_two_vertices_counts_once() {
        let params = ComparisonParams::with_tolerance(0.1);
        let a = face(p(0.0, 0.0, 0.0), p(0.15, 0.0, 0.0), p(0.0, 5.0, 0.0));
        let b = face(p(0.075, 0.0, 0.0), p(3.0, -2.0, 0.0), p(3.0, 2.0, 0.0));

        assert!(is_coplanar(&a, &b, EXACT));
        assert_eq!(shared_vertex_count(&a, &b, params), 1);
        assert_eq!(shared_vertex_count(&b, &a, params), 1);
        assert!(!is_jointed(&a, &b, params));
        assert!(!is_jointed(&b, &a, params));
    }
}
