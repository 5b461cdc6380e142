use tracing::debug;

use crate::error::{Result, SelectionError};
use crate::math::{ComparisonParams, Vector3};
use crate::operations::grouping::GrowFromSeed;
use crate::topology::{FaceData, FaceId, FaceStore};

use super::{BoundaryConditionList, BoundaryKind};

/// What a click on a face currently does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// Clicks are ignored.
    #[default]
    Idle,
    /// Clicks assign the grown patch to the active anchor.
    Anchor,
    /// Clicks assign the grown patch to the active load.
    Load,
}

impl SelectionMode {
    fn kind(self) -> Option<BoundaryKind> {
        match self {
            Self::Idle => None,
            Self::Anchor => Some(BoundaryKind::Anchor),
            Self::Load => Some(BoundaryKind::Load),
        }
    }
}

/// Selection state for one part: the current mode plus its anchors and loads.
#[derive(Debug, Clone)]
pub struct SelectionSession {
    mode: SelectionMode,
    anchors: BoundaryConditionList,
    loads: BoundaryConditionList,
    params: ComparisonParams,
}

impl Default for SelectionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSession {
    /// Creates an idle session with no conditions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: SelectionMode::Idle,
            anchors: BoundaryConditionList::new(BoundaryKind::Anchor),
            loads: BoundaryConditionList::new(BoundaryKind::Load),
            params: ComparisonParams::default(),
        }
    }

    /// Sets the comparison parameters used to grow selections.
    #[must_use]
    pub fn with_params(mut self, params: ComparisonParams) -> Self {
        self.params = params;
        self
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Switches to `mode`.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "changed selection mode");
            self.mode = mode;
        }
    }

    /// Returns to [`SelectionMode::Idle`], keeping every recorded condition.
    pub fn clear(&mut self) {
        self.set_mode(SelectionMode::Idle);
    }

    /// Anchor conditions.
    #[must_use]
    pub fn anchors(&self) -> &BoundaryConditionList {
        &self.anchors
    }

    /// Anchor conditions, mutably.
    pub fn anchors_mut(&mut self) -> &mut BoundaryConditionList {
        &mut self.anchors
    }

    /// Load conditions.
    #[must_use]
    pub fn loads(&self) -> &BoundaryConditionList {
        &self.loads
    }

    /// Load conditions, mutably.
    pub fn loads_mut(&mut self) -> &mut BoundaryConditionList {
        &mut self.loads
    }

    /// Grows the patch around `seed` over every face in `store` and assigns
    /// it to the active condition for the current mode.
    ///
    /// The first condition of a kind is created on demand. The previous
    /// faces of the active condition are replaced.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::Idle`] in idle mode, or an error if `seed`
    /// is not in `store`.
    pub fn select(&mut self, store: &FaceStore, seed: FaceId) -> Result<&[FaceId]> {
        let kind = self.mode.kind().ok_or(SelectionError::Idle)?;
        let faces = GrowFromSeed::over_store(seed, store)
            .with_params(self.params)
            .execute(store)?;

        let list = match kind {
            BoundaryKind::Anchor => &mut self.anchors,
            BoundaryKind::Load => &mut self.loads,
        };
        let condition = list.active_or_add();
        debug!(name = %condition.name, faces = faces.len(), "assigned selection");
        condition.faces = faces;
        Ok(&condition.faces)
    }

    /// Force vector of the active load, using the normal of its first face.
    ///
    /// Returns the zero vector when there is no active load or it has no
    /// faces yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the load's first face is not in `store`.
    pub fn load_vector(&self, store: &FaceStore) -> Result<Vector3> {
        let Some(load) = self.loads.active() else {
            return Ok(Vector3::zeros());
        };
        let (Some(&first), Some(force)) = (load.faces.first(), load.force) else {
            return Ok(Vector3::zeros());
        };
        let face: &FaceData = store.face(first)?;
        Ok(force.vector(&face.normal))
    }
}
