//! Live pairing of an anchor kind with an installed host constraint.

mod core;

pub use core::{Connection, ConnectionRelation};
