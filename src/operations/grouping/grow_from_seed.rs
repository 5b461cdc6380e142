use tracing::debug;

use crate::error::Result;
use crate::geometry::{is_coplanar, is_jointed};
use crate::math::ComparisonParams;
use crate::topology::{FaceData, FaceId, FaceStore};

/// Grows the contiguous coplanar patch containing a seed face.
///
/// Candidates coplanar with the seed but not reachable from it through a
/// chain of jointed faces are left out, so a click on one side of a part
/// never highlights a separate patch that happens to lie in the same plane.
pub struct GrowFromSeed {
    seed: FaceId,
    candidates: Vec<FaceId>,
    params: ComparisonParams,
}

impl GrowFromSeed {
    /// Creates a new `GrowFromSeed` operation.
    #[must_use]
    pub fn new(seed: FaceId, candidates: Vec<FaceId>) -> Self {
        Self {
            seed,
            candidates,
            params: ComparisonParams::default(),
        }
    }

    /// Creates an operation using every face of `store` as a candidate.
    #[must_use]
    pub fn over_store(seed: FaceId, store: &FaceStore) -> Self {
        Self::new(seed, store.ids().collect())
    }

    /// Sets custom comparison parameters.
    #[must_use]
    pub fn with_params(mut self, params: ComparisonParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the accepted faces.
    ///
    /// The seed comes first, the rest follow in acceptance order.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed or a candidate is not in `store`.
    pub fn execute(&self, store: &FaceStore) -> Result<Vec<FaceId>> {
        self.execute_with(store, |_, _| {})
    }

    /// Like [`execute`](Self::execute), calling `visit` once per accepted face.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed or a candidate is not in `store`.
    pub fn execute_with<F>(&self, store: &FaceStore, mut visit: F) -> Result<Vec<FaceId>>
    where
        F: FnMut(FaceId, &FaceData),
    {
        let seed = store.face(self.seed)?;

        // Coplanarity is only checked against the seed.
        let mut pending: Vec<(FaceId, &FaceData)> = Vec::new();
        for &id in &self.candidates {
            let face = store.face(id)?;
            if id == self.seed || pending.iter().any(|&(p, _)| p == id) {
                continue;
            }
            if is_coplanar(seed, face, self.params) {
                pending.push((id, face));
            }
        }
        let coplanar = pending.len();

        let mut accepted: Vec<(FaceId, &FaceData)> = vec![(self.seed, seed)];
        loop {
            let before = accepted.len();
            pending.retain(|&(id, face)| {
                if accepted.iter().any(|&(_, a)| is_jointed(a, face, self.params)) {
                    accepted.push((id, face));
                    false
                } else {
                    true
                }
            });
            if accepted.len() == before {
                break;
            }
        }

        debug!(
            coplanar,
            accepted = accepted.len(),
            excluded = pending.len(),
            "grew selection from seed"
        );

        Ok(accepted
            .into_iter()
            .map(|(id, face)| {
                visit(id, face);
                id
            })
            .collect())
    }
}
