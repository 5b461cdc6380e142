//! Anchor and load selection on top of [`GrowFromSeed`](crate::operations::grouping::GrowFromSeed).
//!
//! A [`SelectionSession`] is an explicit state machine over
//! [`SelectionMode`]. Every selection made while in `Anchor` or `Load` mode
//! lands on the active entry of the matching [`BoundaryConditionList`].

mod boundary;
mod session;

pub use boundary::{
    BoundaryCondition, BoundaryConditionList, BoundaryKind, DirectionType, Force, SurfaceType,
};
pub use session::{SelectionMode, SelectionSession};
