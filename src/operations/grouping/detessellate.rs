use tracing::debug;

use crate::error::Result;
use crate::geometry::{is_coplanar, is_jointed};
use crate::math::ComparisonParams;
use crate::topology::{FaceData, FaceGroup, FaceId, FaceStore};

use super::GroupingStrategy;

/// Merges triangles back into flat polygonal regions.
///
/// Two triangles end up in the same group when they are coplanar and
/// connected through triangles sharing at least two vertices.
pub struct Detessellate {
    faces: Vec<FaceId>,
    params: ComparisonParams,
    strategy: GroupingStrategy,
}

impl Detessellate {
    /// Creates a new `Detessellate` operation over `faces`, in that order.
    ///
    /// Repeated IDs are allowed.
    #[must_use]
    pub fn new(faces: Vec<FaceId>) -> Self {
        Self {
            faces,
            params: ComparisonParams::default(),
            strategy: GroupingStrategy::default(),
        }
    }

    /// Creates an operation over every face of `store`, in insertion order.
    #[must_use]
    pub fn all(store: &FaceStore) -> Self {
        Self::new(store.ids().collect())
    }

    /// Sets custom comparison parameters.
    #[must_use]
    pub fn with_params(mut self, params: ComparisonParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the grouping strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: GroupingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Executes the grouping.
    ///
    /// Groups are returned in order of their first member's input position,
    /// members in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if a face is not in `store`.
    pub fn execute(&self, store: &FaceStore) -> Result<Vec<FaceGroup>> {
        let faces = self
            .faces
            .iter()
            .map(|&id| Ok((id, store.face(id)?)))
            .collect::<Result<Vec<_>>>()?;

        let groups = match self.strategy {
            GroupingStrategy::FirstMatch => first_match(&faces, self.params),
            GroupingStrategy::Connected => connected(&faces, self.params),
        };

        debug!(
            faces = faces.len(),
            groups = groups.len(),
            strategy = ?self.strategy,
            "detessellated"
        );
        Ok(groups)
    }
}

fn first_match(faces: &[(FaceId, &FaceData)], params: ComparisonParams) -> Vec<FaceGroup> {
    let mut groups: Vec<FaceGroup> = Vec::new();
    for &(id, face) in faces {
        match groups.iter_mut().find(|g| g.accepts(face, params)) {
            Some(group) => group.push(id, face, params),
            None => groups.push(FaceGroup::from_seed(id, face, params)),
        }
    }
    groups
}

/// Breadth-first growth from the earliest unassigned face.
///
/// Adjacency is pairwise, but coplanarity is always checked against the
/// group's seed, so normals cannot drift away from `FaceGroup::normal`
/// under a tolerance.
fn connected(faces: &[(FaceId, &FaceData)], params: ComparisonParams) -> Vec<FaceGroup> {
    let mut assigned = vec![false; faces.len()];
    let mut groups: Vec<FaceGroup> = Vec::new();

    for start in 0..faces.len() {
        if assigned[start] {
            continue;
        }
        assigned[start] = true;
        let seed = faces[start].1;

        let mut members = vec![start];
        let mut next = 0;
        while next < members.len() {
            let member = faces[members[next]].1;
            next += 1;
            for (j, &(_, face)) in faces.iter().enumerate() {
                if !assigned[j] && is_coplanar(seed, face, params) && is_jointed(member, face, params)
                {
                    assigned[j] = true;
                    members.push(j);
                }
            }
        }

        members.sort_unstable();
        let (id, first) = faces[start];
        let mut group = FaceGroup::from_seed(id, first, params);
        for &i in &members[1..] {
            let (id, face) = faces[i];
            group.push(id, face, params);
        }
        groups.push(group);
    }
    groups
}
