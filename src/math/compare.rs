use super::{Point3, Vector3};

/// Parameters controlling point and normal comparisons.
///
/// The default tolerance of `0.0` is exact floating-point equality, which is
/// what a mesh with shared vertex buffers needs. Imported meshes that went
/// through a transform pipeline usually want something like `1e-6`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonParams {
    /// Maximum absolute per-component difference still considered equal.
    pub tolerance: f64,
}

impl ComparisonParams {
    /// Exact comparison, no tolerance.
    pub const EXACT: Self = Self { tolerance: 0.0 };

    /// Creates comparison parameters with the given absolute tolerance.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    #[inline]
    fn scalar_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.tolerance
    }
}

impl Default for ComparisonParams {
    fn default() -> Self {
        Self::EXACT
    }
}

/// Returns `true` if every coordinate of `p` and `q` matches within tolerance.
#[must_use]
pub fn points_equal(p: &Point3, q: &Point3, params: ComparisonParams) -> bool {
    params.scalar_eq(p.x, q.x) && params.scalar_eq(p.y, q.y) && params.scalar_eq(p.z, q.z)
}

/// Returns `true` if every component of `a` and `b` matches within tolerance.
#[must_use]
pub fn vectors_equal(a: &Vector3, b: &Vector3, params: ComparisonParams) -> bool {
    params.scalar_eq(a.x, b.x) && params.scalar_eq(a.y, b.y) && params.scalar_eq(a.z, b.z)
}
