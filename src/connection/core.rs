use std::cell::RefCell;
use std::rc::Weak;

use crate::anchor::{Anchor, AnchorKind};
use crate::host::ConstraintId;
use crate::relation::{DimensionRelation, Priority, Relation};
use crate::tree::TreeState;

/// Relation a connection was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConnectionRelation {
    /// Offset against a same-kind anchor, or a constant dimension.
    Simple(Relation),
    /// Dimension against another dimension, with multiplier and constant.
    Dimension(DimensionRelation),
}

/// One accumulated constraint description and its host handle.
///
/// The kind and handle are fixed at creation; constant, priority, and the
/// active flag proxy directly onto the host constraint. Identity is the
/// host handle.
#[derive(Clone)]
pub struct Connection {
    state: Weak<RefCell<TreeState>>,
    kind: AnchorKind,
    relation: ConnectionRelation,
    target: Option<Anchor>,
    handle: ConstraintId,
}

impl Connection {
    pub(crate) fn new(
        state: Weak<RefCell<TreeState>>,
        kind: AnchorKind,
        relation: ConnectionRelation,
        target: Option<Anchor>,
        handle: ConstraintId,
    ) -> Self {
        Self {
            state,
            kind,
            relation,
            target,
            handle,
        }
    }

    pub fn kind(&self) -> AnchorKind {
        self.kind
    }

    /// Relation as recorded at creation time, including any negation the
    /// far-edge operations applied.
    pub fn relation(&self) -> ConnectionRelation {
        self.relation
    }

    /// Simple relation, if this is not a dimension-to-dimension connection.
    pub fn simple_relation(&self) -> Option<Relation> {
        match self.relation {
            ConnectionRelation::Simple(relation) => Some(relation),
            ConnectionRelation::Dimension(_) => None,
        }
    }

    /// Far endpoint of the constraint, if it has one.
    pub fn target(&self) -> Option<Anchor> {
        self.target
    }

    pub fn handle(&self) -> ConstraintId {
        self.handle
    }

    pub fn constant(&self) -> f32 {
        self.with_state(0.0, |state| state.host.constant(self.handle))
    }

    pub fn set_constant(&self, constant: f32) {
        self.with_state((), |state| state.host.set_constant(self.handle, constant));
    }

    pub fn priority(&self) -> Priority {
        self.with_state(Priority::REQUIRED, |state| state.host.priority(self.handle))
    }

    pub fn set_priority(&self, priority: Priority) {
        self.with_state((), |state| state.host.set_priority(self.handle, priority));
    }

    pub fn is_active(&self) -> bool {
        self.with_state(false, |state| state.host.is_active(self.handle))
    }

    pub fn set_active(&self, active: bool) {
        self.with_state((), |state| state.host.set_active(self.handle, active));
    }

    pub(crate) fn remove_from_host(&self) {
        self.with_state((), |state| state.host.remove(self.handle));
    }

    fn with_state<T>(&self, fallback: T, f: impl FnOnce(&mut TreeState) -> T) -> T {
        match self.state.upgrade() {
            Some(state) => f(&mut state.borrow_mut()),
            None => fallback,
        }
    }
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for Connection {}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("kind", &self.kind)
            .field("relation", &self.relation)
            .field("constant", &self.constant())
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::anchor::AnchorKind;
    use crate::relation::Priority;
    use crate::tree::BoxTree;

    #[test]
    fn mutators_proxy_to_the_host_constraint() {
        let tree = BoxTree::new();
        let parent = tree.create_box("parent");
        let child = tree.create_box("child");
        tree.insert(&child, &parent).unwrap();

        let layout = child.layout().top(8).activate();
        let connection = layout.first_of(AnchorKind::Top).unwrap();

        assert_eq!(connection.constant(), 8.0);
        connection.set_constant(24.0);
        assert_eq!(connection.constant(), 24.0);

        connection.set_priority(Priority::LOW);
        assert_eq!(connection.priority(), Priority::LOW);

        assert!(connection.is_active());
        connection.set_active(false);
        assert!(!connection.is_active());
    }

    #[test]
    fn identity_is_the_host_handle() {
        let tree = BoxTree::new();
        let parent = tree.create_box("parent");
        let child = tree.create_box("child");
        tree.insert(&child, &parent).unwrap();

        let layout = child.layout().top(0).top(0).activate();
        let tops = layout.find_all(AnchorKind::Top);
        assert_eq!(tops.len(), 2);
        assert_eq!(tops[0], tops[0].clone());
        assert_ne!(tops[0], tops[1]);
    }

    #[test]
    fn kind_is_fixed_at_creation() {
        let tree = BoxTree::new();
        let parent = tree.create_box("parent");
        let child = tree.create_box("child");
        tree.insert(&child, &parent).unwrap();

        let layout = child.layout().leading(4).activate();
        let connection = layout.first_of(AnchorKind::Leading).unwrap();
        connection.set_constant(0.0);
        assert_eq!(connection.kind(), AnchorKind::Leading);
    }
}
