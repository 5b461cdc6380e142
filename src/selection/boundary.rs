use tracing::debug;

use crate::error::SelectionError;
use crate::math::{Vector3, TOLERANCE};
use crate::topology::FaceId;

/// Default magnitude given to a freshly added load.
const DEFAULT_LOAD_MAGNITUDE: f64 = 10.0;

/// The two kinds of boundary condition a face patch can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Fixed constraint.
    Anchor,
    /// Applied force.
    Load,
}

impl BoundaryKind {
    fn label(self) -> &'static str {
        match self {
            Self::Anchor => "Anchor",
            Self::Load => "Load",
        }
    }
}

/// Direction a load acts in, relative to its face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirectionType {
    /// Along the face normal.
    #[default]
    Normal,
    /// Within the face plane, along the projection of [`Force::axis`].
    Parallel,
}

/// Shape of the surface a condition is applied to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SurfaceType {
    /// A planar patch.
    #[default]
    Flat,
    /// A surface curving away from its normal.
    Concave,
    /// A surface curving towards its normal.
    Convex,
}

/// A force applied to a loaded face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Force {
    /// Force magnitude.
    pub magnitude: f64,
    /// If `true` the force points opposite to its direction.
    pub pull: bool,
    /// Whether the force follows the normal or lies in the face plane.
    pub direction: DirectionType,
    /// In-plane reference axis for [`DirectionType::Parallel`].
    pub axis: Vector3,
}

impl Force {
    /// Creates a pushing force of the given magnitude along the face normal.
    #[must_use]
    pub fn new(magnitude: f64) -> Self {
        Self {
            magnitude,
            pull: false,
            direction: DirectionType::Normal,
            axis: Vector3::zeros(),
        }
    }

    /// Force vector for a face with unit normal `normal`.
    ///
    /// A parallel force whose axis has no component in the face plane is
    /// the zero vector.
    #[must_use]
    pub fn vector(&self, normal: &Vector3) -> Vector3 {
        let dir = match self.direction {
            DirectionType::Normal => *normal,
            DirectionType::Parallel => {
                let in_plane = self.axis - normal * self.axis.dot(normal);
                in_plane
                    .try_normalize(TOLERANCE)
                    .unwrap_or_else(Vector3::zeros)
            }
        };
        let v = dir * self.magnitude;
        if self.pull {
            -v
        } else {
            v
        }
    }
}

impl Default for Force {
    fn default() -> Self {
        Self::new(DEFAULT_LOAD_MAGNITUDE)
    }
}

/// A named face patch with its constraint or load.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCondition {
    /// Display name, e.g. `"Load 2"`.
    pub name: String,
    /// Selected faces, seed first.
    pub faces: Vec<FaceId>,
    /// Applied force. Always `None` for anchors.
    pub force: Option<Force>,
    /// Shape of the selected surface.
    pub surface: SurfaceType,
}

impl BoundaryCondition {
    /// Creates an empty condition of the given kind.
    #[must_use]
    pub fn new(kind: BoundaryKind, name: impl Into<String>) -> Self {
        let force = match kind {
            BoundaryKind::Anchor => None,
            BoundaryKind::Load => Some(Force::default()),
        };
        Self {
            name: name.into(),
            faces: Vec::new(),
            force,
            surface: SurfaceType::default(),
        }
    }

    /// Numeric suffix of the name (`"Anchor 3"` gives `3`).
    fn number(&self) -> Option<u32> {
        self.name.rsplit(' ').next()?.parse().ok()
    }
}

/// Ordered list of conditions of one kind, with one active entry.
#[derive(Debug, Clone)]
pub struct BoundaryConditionList {
    kind: BoundaryKind,
    conditions: Vec<BoundaryCondition>,
    active: Option<usize>,
}

impl BoundaryConditionList {
    /// Creates an empty list.
    #[must_use]
    pub fn new(kind: BoundaryKind) -> Self {
        Self {
            kind,
            conditions: Vec::new(),
            active: None,
        }
    }

    /// Kind of every entry in this list.
    #[must_use]
    pub fn kind(&self) -> BoundaryKind {
        self.kind
    }

    /// Appends a new empty condition, makes it active and returns its index.
    ///
    /// The entry is numbered one past the last entry, so numbers are not
    /// reused after removing from the middle.
    pub fn add(&mut self) -> usize {
        let next = self
            .conditions
            .last()
            .and_then(BoundaryCondition::number)
            .map_or(1, |n| n + 1);
        let name = format!("{} {next}", self.kind.label());
        debug!(%name, "added boundary condition");

        self.conditions.push(BoundaryCondition::new(self.kind, name));
        let index = self.conditions.len() - 1;
        self.active = Some(index);
        index
    }

    /// Removes and returns the condition at `index`.
    ///
    /// The active entry is kept when it survives; otherwise the list falls
    /// back to its first entry.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<BoundaryCondition, SelectionError> {
        self.check(index)?;
        let removed = self.conditions.remove(index);
        self.active = match self.active {
            Some(a) if a == index => (!self.conditions.is_empty()).then_some(0),
            Some(a) if a > index => Some(a - 1),
            other => other,
        };
        Ok(removed)
    }

    /// Makes the condition at `index` active.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn select(&mut self, index: usize) -> Result<(), SelectionError> {
        self.check(index)?;
        self.active = Some(index);
        Ok(())
    }

    /// Index of the active condition.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The active condition.
    #[must_use]
    pub fn active(&self) -> Option<&BoundaryCondition> {
        self.active.and_then(|i| self.conditions.get(i))
    }

    /// The active condition, mutably.
    pub fn active_mut(&mut self) -> Option<&mut BoundaryCondition> {
        self.active.and_then(|i| self.conditions.get_mut(i))
    }

    /// Returns the active condition, adding one first if the list is empty.
    pub fn active_or_add(&mut self) -> &mut BoundaryCondition {
        let index = match self.active {
            Some(i) => i,
            None => self.add(),
        };
        &mut self.conditions[index]
    }

    /// The condition at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BoundaryCondition> {
        self.conditions.get(index)
    }

    /// All conditions in order.
    pub fn iter(&self) -> impl Iterator<Item = &BoundaryCondition> {
        self.conditions.iter()
    }

    /// Number of conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    fn check(&self, index: usize) -> Result<(), SelectionError> {
        if index < self.conditions.len() {
            Ok(())
        } else {
            Err(SelectionError::IndexOutOfRange {
                index,
                len: self.conditions.len(),
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn names(list: &BoundaryConditionList) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn entries_are_numbered_from_the_last() {
        let mut loads = BoundaryConditionList::new(BoundaryKind::Load);
        loads.add();
        loads.add();
        loads.add();
        assert_eq!(names(&loads), ["Load 1", "Load 2", "Load 3"]);

        loads.remove(0).unwrap();
        loads.add();
        assert_eq!(names(&loads), ["Load 2", "Load 3", "Load 4"]);

        loads.remove(2).unwrap();
        loads.add();
        assert_eq!(names(&loads), ["Load 2", "Load 3", "Load 4"]);
    }

    #[test]
    fn add_activates_new_entry() {
        let mut anchors = BoundaryConditionList::new(BoundaryKind::Anchor);
        assert!(anchors.active().is_none());
        let index = anchors.add();
        assert_eq!(anchors.active_index(), Some(index));
        assert_eq!(anchors.active().unwrap().name, "Anchor 1");
        assert!(anchors.active().unwrap().force.is_none());
    }

    #[test]
    fn loads_get_default_force() {
        let mut loads = BoundaryConditionList::new(BoundaryKind::Load);
        loads.add();
        let force = loads.active().unwrap().force.unwrap();
        assert_relative_eq!(force.magnitude, 10.0);
        assert!(!force.pull);
        assert_eq!(force.direction, DirectionType::Normal);
        assert_eq!(loads.active().unwrap().surface, SurfaceType::Flat);
    }

    #[test]
    fn remove_keeps_or_resets_active() {
        let mut anchors = BoundaryConditionList::new(BoundaryKind::Anchor);
        anchors.add();
        anchors.add();
        anchors.add();

        anchors.select(2).unwrap();
        anchors.remove(0).unwrap();
        assert_eq!(anchors.active().unwrap().name, "Anchor 3");

        anchors.remove(1).unwrap();
        assert_eq!(anchors.active().unwrap().name, "Anchor 2");

        anchors.remove(0).unwrap();
        assert!(anchors.is_empty());
        assert!(anchors.active().is_none());
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut anchors = BoundaryConditionList::new(BoundaryKind::Anchor);
        assert!(matches!(
            anchors.select(0),
            Err(SelectionError::IndexOutOfRange { index: 0, len: 0 })
        ));
        assert!(anchors.remove(3).is_err());
    }

    #[test]
    fn active_or_add_creates_first_entry_once() {
        let mut loads = BoundaryConditionList::new(BoundaryKind::Load);
        loads.active_or_add();
        loads.active_or_add();
        assert_eq!(loads.len(), 1);
    }

    #[test]
    fn pull_reverses_force() {
        let n = Vector3::z();
        let mut force = Force::new(5.0);
        assert_relative_eq!(force.vector(&n), Vector3::new(0.0, 0.0, 5.0));
        force.pull = true;
        assert_relative_eq!(force.vector(&n), Vector3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn parallel_force_lies_in_face_plane() {
        let n = Vector3::z();
        let force = Force {
            direction: DirectionType::Parallel,
            axis: Vector3::new(3.0, 0.0, 4.0),
            ..Force::new(2.0)
        };
        assert_relative_eq!(force.vector(&n), Vector3::new(2.0, 0.0, 0.0));

        let pulled = Force { pull: true, ..force };
        assert_relative_eq!(pulled.vector(&n), Vector3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn parallel_force_along_normal_vanishes() {
        let force = Force {
            direction: DirectionType::Parallel,
            axis: Vector3::z(),
            ..Force::default()
        };
        assert_relative_eq!(force.vector(&Vector3::z()), Vector3::zeros());
    }
}
