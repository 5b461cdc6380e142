pub mod extraction;
pub mod grouping;
