mod detessellate;
mod grow_from_seed;

pub use detessellate::Detessellate;
pub use grow_from_seed::GrowFromSeed;

/// How [`Detessellate`] partitions faces into groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupingStrategy {
    /// Single pass in input order. Each face joins the first existing group
    /// it is jointed and coplanar with, or starts a new one.
    ///
    /// Cheap, but order-dependent: a face that only touches a group through
    /// members added after it was visited ends up in a group of its own.
    #[default]
    FirstMatch,
    /// Breadth-first growth from the earliest unassigned face, through
    /// jointed neighbours coplanar with that seed. With exact comparison
    /// this yields the connected components of the jointed-and-coplanar
    /// relation regardless of input order. Quadratic in face count.
    Connected,
}
