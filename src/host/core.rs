use crate::anchor::Anchor;
use crate::relation::{Priority, RelationOp};

/// Opaque handle to one installed host constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintId(u64);

impl ConstraintId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Full description of one desired relationship, as handed to the host.
///
/// `target` is `None` for constant dimension constraints
/// (`width == 100`); `multiplier` only matters when a target dimension is
/// present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintSpec {
    pub subject: Anchor,
    pub target: Option<Anchor>,
    pub op: RelationOp,
    pub constant: f32,
    pub multiplier: f32,
    pub priority: Priority,
}

/// The host layout engine's constraint table.
///
/// Constraints are installed inactive; activation is a separate, idempotent
/// toggle. Accessors on removed or unknown handles return neutral values
/// (`false`, `0.0`, required) rather than failing — the caller-facing
/// failure policy lives a layer above this boundary.
pub trait ConstraintHost {
    /// Installs a constraint and returns its handle. The constraint starts
    /// inactive.
    fn install(&mut self, spec: ConstraintSpec) -> ConstraintId;

    /// Permanently removes a constraint from the table.
    fn remove(&mut self, id: ConstraintId);

    /// Toggles enforcement. Activating an active constraint is a no-op.
    ///
    /// The host may schedule a layout re-pass as a side effect; that is
    /// outside this crate's control.
    fn set_active(&mut self, id: ConstraintId, active: bool);

    fn is_active(&self, id: ConstraintId) -> bool;

    fn constant(&self, id: ConstraintId) -> f32;

    fn set_constant(&mut self, id: ConstraintId, constant: f32);

    fn priority(&self, id: ConstraintId) -> Priority;

    fn set_priority(&mut self, id: ConstraintId, priority: Priority);

    /// Installed spec for inspection, if the constraint still exists.
    fn spec(&self, id: ConstraintId) -> Option<ConstraintSpec>;

    /// Number of constraints currently installed.
    fn installed(&self) -> usize;
}
