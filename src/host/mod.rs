//! Boundary with the host layout engine.
//!
//! The crate never solves constraints. It describes them as
//! [`ConstraintSpec`] values and hands them to a [`ConstraintHost`], which
//! owns the constraint table and the actual geometry pass. The bundled
//! [`ConstraintTable`] is a recording host: it tracks installation and
//! activation state so descriptions can be built and tested without a
//! solver behind them.

mod core;
mod table;

pub use core::{ConstraintHost, ConstraintId, ConstraintSpec};
pub use table::ConstraintTable;
