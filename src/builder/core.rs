use std::cell::RefCell;
use std::rc::Weak;

use serde_json::json;

use crate::anchor::{Anchor, AnchorKind};
use crate::connection::{Connection, ConnectionRelation};
use crate::host::ConstraintSpec;
use crate::logging::{LogFields, json_kv};
use crate::relation::{DimensionRelation, Relation};
use crate::tree::{BoxId, ParticipantKind, TreeState};

/// Accumulates constraint descriptions for one subject box and applies
/// them as a batch.
///
/// The builder holds a non-owning reference to its subject; it never keeps
/// the box alive. Dropping a builder with pending never-activated
/// connections logs a warning, since such a builder did nothing.
pub struct LayoutBuilder {
    state: Weak<RefCell<TreeState>>,
    subject: BoxId,
    subject_name: String,
    connections: Vec<Connection>,
    did_activate: bool,
    destroyed: bool,
}

impl LayoutBuilder {
    pub(crate) fn for_subject(state: Weak<RefCell<TreeState>>, subject: BoxId) -> Self {
        let subject_name = state
            .upgrade()
            .map(|s| s.borrow().name_of(subject))
            .unwrap_or_else(|| "<released>".to_string());
        Self {
            state,
            subject,
            subject_name,
            connections: Vec::new(),
            did_activate: false,
            destroyed: false,
        }
    }

    pub fn subject(&self) -> BoxId {
        self.subject
    }

    /// All connections in the order their operations were chained.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// True after [`destroy`](Self::destroy); every further operation is a
    /// no-op.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // Lifecycle

    /// Activates every accumulated connection, in insertion order.
    /// Re-activating an already-active batch changes nothing.
    pub fn activate(mut self) -> Self {
        if self.destroyed {
            return self;
        }
        for connection in &self.connections {
            connection.set_active(true);
        }
        if let Some(state) = self.state.upgrade() {
            state
                .borrow_mut()
                .metrics
                .record_activations(self.connections.len());
        }
        self.did_activate = true;
        self
    }

    /// Deactivates every accumulated connection, in insertion order.
    pub fn deactivate(self) -> Self {
        if self.destroyed {
            return self;
        }
        for connection in &self.connections {
            connection.set_active(false);
        }
        if let Some(state) = self.state.upgrade() {
            state
                .borrow_mut()
                .metrics
                .record_deactivations(self.connections.len());
        }
        self
    }

    /// Deactivates, removes every connection from the host, and leaves the
    /// builder inert.
    pub fn destroy(mut self) -> Self {
        if self.destroyed {
            return self;
        }
        for connection in &self.connections {
            connection.set_active(false);
            connection.remove_from_host();
        }
        if let Some(state) = self.state.upgrade() {
            state
                .borrow_mut()
                .metrics
                .record_destroyed(self.connections.len());
        }
        self.connections.clear();
        self.destroyed = true;
        self
    }

    // Connection primitives shared by the operation families.

    /// Subject anchor against a target anchor of the same axis.
    pub(crate) fn connect_simple(
        mut self,
        kind: AnchorKind,
        target: Anchor,
        relation: Relation,
    ) -> Self {
        if self.destroyed {
            return self;
        }
        let Some(state) = self.state.upgrade() else {
            return self;
        };

        let handle = {
            let mut st = state.borrow_mut();
            if !st.is_alive(self.subject) {
                st.warn("subject already released", self.op_fields(&format!("{:?}", kind), None));
                return self;
            }
            if !st.is_alive(target.box_id) {
                st.warn("target already released", self.op_fields(&format!("{:?}", kind), Some(target)));
                return self;
            }
            st.install(ConstraintSpec {
                subject: Anchor::new(self.subject, kind),
                target: Some(target),
                op: relation.op(),
                constant: relation.offset(),
                multiplier: 1.0,
                priority: relation.priority(),
            })
        };

        self.connections.push(Connection::new(
            self.state.clone(),
            kind,
            ConnectionRelation::Simple(relation),
            Some(target),
            handle,
        ));
        self
    }

    /// Subject dimension against a bare constant.
    pub(crate) fn connect_dim_const(mut self, kind: AnchorKind, relation: Relation) -> Self {
        if self.destroyed {
            return self;
        }
        let Some(state) = self.state.upgrade() else {
            return self;
        };

        let handle = {
            let mut st = state.borrow_mut();
            if !st.is_alive(self.subject) {
                st.warn("subject already released", self.op_fields(&format!("{:?}", kind), None));
                return self;
            }
            st.install(ConstraintSpec {
                subject: Anchor::new(self.subject, kind),
                target: None,
                op: relation.op(),
                constant: relation.offset(),
                multiplier: 1.0,
                priority: relation.priority(),
            })
        };

        self.connections.push(Connection::new(
            self.state.clone(),
            kind,
            ConnectionRelation::Simple(relation),
            None,
            handle,
        ));
        self
    }

    /// Subject dimension against another dimension anchor.
    pub(crate) fn connect_dim(mut self, kind: AnchorKind, relation: DimensionRelation) -> Self {
        if self.destroyed {
            return self;
        }
        let Some(state) = self.state.upgrade() else {
            return self;
        };

        let target = relation.target().anchor();
        let handle = {
            let mut st = state.borrow_mut();
            if !st.is_alive(self.subject) {
                st.warn("subject already released", self.op_fields(&format!("{:?}", kind), None));
                return self;
            }
            if !st.is_alive(target.box_id) {
                st.warn("target already released", self.op_fields(&format!("{:?}", kind), Some(target)));
                return self;
            }
            st.install(ConstraintSpec {
                subject: Anchor::new(self.subject, kind),
                target: Some(target),
                op: relation.op(),
                constant: relation.constant(),
                multiplier: relation.multiplier(),
                priority: relation.priority(),
            })
        };

        self.connections.push(Connection::new(
            self.state.clone(),
            kind,
            ConnectionRelation::Dimension(relation),
            Some(target),
            handle,
        ));
        self
    }

    /// Parent of the subject, or `None` plus one diagnostic.
    pub(crate) fn parent_for(&self, op: &str) -> Option<BoxId> {
        let state = self.state.upgrade()?;
        let mut st = state.borrow_mut();
        if !st.is_alive(self.subject) {
            st.warn("subject already released", self.op_fields(op, None));
            return None;
        }
        match st.parent_of(self.subject) {
            Some(parent) => Some(parent),
            None => {
                st.warn("no parent to constrain against", self.op_fields(op, None));
                None
            }
        }
    }

    /// True when the subject is a guide, which has no baselines.
    pub(crate) fn reject_baseline_for_guides(&self, op: &str) -> bool {
        let Some(state) = self.state.upgrade() else {
            return true;
        };
        let mut st = state.borrow_mut();
        if st.kind_of(self.subject) == Some(ParticipantKind::Guide) {
            st.warn("guides have no baselines", self.op_fields(op, None));
            return true;
        }
        false
    }

    pub(crate) fn subject_anchor(&self, kind: AnchorKind) -> Anchor {
        Anchor::new(self.subject, kind)
    }

    fn op_fields(&self, op: &str, target: Option<Anchor>) -> LogFields {
        let mut fields = LogFields::new();
        let (k, v) = json_kv("subject", json!(self.subject_name.clone()));
        fields.insert(k, v);
        let (k, v) = json_kv("op", json!(op));
        fields.insert(k, v);
        if let Some(target) = target {
            let (k, v) = json_kv("target", json!(target.box_id.value()));
            fields.insert(k, v);
        }
        fields
    }
}

impl Drop for LayoutBuilder {
    fn drop(&mut self) {
        // A builder full of pending connections that was never activated
        // did nothing; that is usually an oversight worth surfacing.
        if self.connections.is_empty() || self.did_activate || self.destroyed {
            return;
        }
        if let Some(state) = self.state.upgrade() {
            let mut fields = LogFields::new();
            let (k, v) = json_kv("subject", json!(self.subject_name.clone()));
            fields.insert(k, v);
            let (k, v) = json_kv("pending", json!(self.connections.len()));
            fields.insert(k, v);
            state.borrow().logger.warn(
                "tether::builder",
                "builder dropped without activation",
                fields,
            );
        }
    }
}

impl std::fmt::Debug for LayoutBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutBuilder")
            .field("subject", &self.subject_name)
            .field("connections", &self.connections.len())
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

/// Batch lifecycle over a group of builders, e.g. the output of the
/// distribution helpers. Builders are visited in iteration order.
pub trait BatchLayout: Sized {
    fn activate_all(self) -> Self;
    fn deactivate_all(self) -> Self;
    fn destroy_all(self) -> Self;
}

impl BatchLayout for Vec<LayoutBuilder> {
    fn activate_all(self) -> Self {
        self.into_iter().map(LayoutBuilder::activate).collect()
    }

    fn deactivate_all(self) -> Self {
        self.into_iter().map(LayoutBuilder::deactivate).collect()
    }

    fn destroy_all(self) -> Self {
        self.into_iter().map(LayoutBuilder::destroy).collect()
    }
}
