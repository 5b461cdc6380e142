use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Computes the unit normal of the triangle `(p0, p1, p2)`.
///
/// The normal is `(p1 - p0) × (p2 - p0)` normalized, so it follows the
/// triangle's own winding. No global orientation is enforced.
///
/// The degeneracy test is relative to the edge lengths, so it does not
/// depend on the mesh's unit scale.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateFace`] if the triangle has zero area.
pub fn triangle_normal(p0: &Point3, p1: &Point3, p2: &Point3) -> Result<Vector3> {
    let e1 = p1 - p0;
    let e2 = p2 - p0;
    let cross = e1.cross(&e2);
    let len = cross.norm();
    if len <= TOLERANCE * e1.norm() * e2.norm() || !len.is_finite() {
        return Err(GeometryError::DegenerateFace { triangle: None }.into());
    }
    Ok(cross / len)
}

/// Average of the three vertices.
#[must_use]
pub fn triangle_centroid(p0: &Point3, p1: &Point3, p2: &Point3) -> Point3 {
    Point3::from((p0.coords + p1.coords + p2.coords) / 3.0)
}

/// Area of the triangle `(p0, p1, p2)`.
#[must_use]
pub fn triangle_area(p0: &Point3, p1: &Point3, p2: &Point3) -> f64 {
    (p1 - p0).cross(&(p2 - p0)).norm() * 0.5
}
