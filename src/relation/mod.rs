//! Numeric relationship descriptors between anchors.
//!
//! A [`Relation`] describes "equal / at most / at least some offset" against
//! an implied target anchor; a [`DimensionRelation`] additionally names a
//! target dimension with a multiplier. Construction is explicit, but bare
//! numbers convert into an `equal`-at-required relation so chained calls
//! stay terse.

mod core;

pub use core::{DimensionRelation, Priority, Relation, RelationOp};
