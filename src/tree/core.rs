use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use super::handles::{BoxRef, GuideRef};
use crate::anchor::GuideRole;
use crate::error::{LayoutError, Result};
use crate::host::{ConstraintHost, ConstraintId, ConstraintSpec, ConstraintTable};
use crate::logging::{LogFields, Logger, json_kv};
use crate::metrics::{LayoutMetrics, MetricSnapshot};

/// Unique identity of a layout participant within its tree.
///
/// Ids are never reused; a removed box leaves its id permanently dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxId(u32);

impl BoxId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Sentinel handed out when a participant could not be created.
    pub(crate) const INVALID: BoxId = BoxId(u32::MAX);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParticipantKind {
    Box,
    Guide,
}

#[derive(Debug)]
struct BoxNode {
    name: String,
    kind: ParticipantKind,
    parent: Option<BoxId>,
    children: Vec<BoxId>,
    role_guides: Vec<(GuideRole, BoxId)>,
    alive: bool,
}

pub(crate) struct TreeState {
    boxes: Vec<BoxNode>,
    pub(crate) host: Box<dyn ConstraintHost>,
    pub(crate) logger: Logger,
    pub(crate) metrics: LayoutMetrics,
}

impl TreeState {
    pub(crate) fn is_alive(&self, id: BoxId) -> bool {
        self.node(id).map(|node| node.alive).unwrap_or(false)
    }

    pub(crate) fn kind_of(&self, id: BoxId) -> Option<ParticipantKind> {
        self.node(id).map(|node| node.kind)
    }

    pub(crate) fn parent_of(&self, id: BoxId) -> Option<BoxId> {
        self.node(id).and_then(|node| node.parent)
    }

    pub(crate) fn name_of(&self, id: BoxId) -> String {
        self.node(id)
            .map(|node| node.name.clone())
            .unwrap_or_else(|| "<unknown>".to_string())
    }

    pub(crate) fn install(&mut self, spec: ConstraintSpec) -> ConstraintId {
        self.metrics.record_connection();
        self.host.install(spec)
    }

    pub(crate) fn warn(&mut self, message: &str, fields: LogFields) {
        self.metrics.record_dropped_op();
        self.logger.warn("tether::builder", message, fields);
    }

    fn node(&self, id: BoxId) -> Option<&BoxNode> {
        self.boxes.get(id.value() as usize)
    }

    fn node_mut(&mut self, id: BoxId) -> Option<&mut BoxNode> {
        self.boxes.get_mut(id.value() as usize)
    }

    fn push_node(&mut self, name: String, kind: ParticipantKind) -> BoxId {
        let id = BoxId::new(self.boxes.len() as u32);
        self.boxes.push(BoxNode {
            name,
            kind,
            parent: None,
            children: Vec::new(),
            role_guides: Vec::new(),
            alive: true,
        });
        id
    }

    fn attach(&mut self, child: BoxId, parent: BoxId) -> Result<()> {
        if !self.is_alive(child) {
            return Err(LayoutError::BoxNotFound(self.name_of(child)));
        }
        if !self.is_alive(parent) {
            return Err(LayoutError::BoxNotFound(self.name_of(parent)));
        }

        // Walking up from the prospective parent must not reach the child.
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(LayoutError::HierarchyCycle {
                    child: self.name_of(child),
                    parent: self.name_of(parent),
                });
            }
            cursor = self.parent_of(id);
        }

        if let Some(previous) = self.parent_of(child) {
            if let Some(node) = self.node_mut(previous) {
                node.children.retain(|&c| c != child);
            }
        }

        self.node_mut(child).expect("child checked alive").parent = Some(parent);
        self.node_mut(parent)
            .expect("parent checked alive")
            .children
            .push(child);
        Ok(())
    }

    fn remove(&mut self, id: BoxId) -> Result<()> {
        if !self.is_alive(id) {
            return Err(LayoutError::BoxNotFound(self.name_of(id)));
        }

        if let Some(parent) = self.parent_of(id) {
            if let Some(node) = self.node_mut(parent) {
                node.children.retain(|&c| c != id);
            }
        }

        let (children, role_guides) = {
            let node = self.node_mut(id).expect("checked alive");
            node.alive = false;
            node.parent = None;
            (
                std::mem::take(&mut node.children),
                std::mem::take(&mut node.role_guides),
            )
        };

        // Children survive but lose their parent link; role guides die
        // with their owner.
        for child in children {
            if let Some(node) = self.node_mut(child) {
                node.parent = None;
            }
        }
        for (_, guide) in role_guides {
            if let Some(node) = self.node_mut(guide) {
                node.alive = false;
                node.parent = None;
            }
        }
        Ok(())
    }

    fn role_guide(&mut self, owner: BoxId, role: GuideRole) -> Option<BoxId> {
        if !self.is_alive(owner) {
            return None;
        }
        if let Some(&(_, existing)) = self
            .node(owner)
            .expect("checked alive")
            .role_guides
            .iter()
            .find(|(r, _)| *r == role)
        {
            return Some(existing);
        }

        let name = format!("{}.{}", self.name_of(owner), role.name());
        let guide = self.push_node(name, ParticipantKind::Guide);
        let owner_node = self.node_mut(owner).expect("checked alive");
        owner_node.role_guides.push((role, guide));
        self.node_mut(guide).expect("just created").parent = Some(owner);
        self.node_mut(owner).expect("checked alive").children.push(guide);
        Some(guide)
    }
}

/// Registry of layout boxes and guides, plus the host engine behind them.
///
/// Cloning is cheap and shares the same tree. Single-threaded by design:
/// all mutation happens synchronously on the caller's thread.
#[derive(Clone)]
pub struct BoxTree {
    state: Rc<RefCell<TreeState>>,
}

impl Default for BoxTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxTree {
    /// Tree backed by the recording [`ConstraintTable`] host with
    /// diagnostics disabled.
    pub fn new() -> Self {
        Self::with_host(ConstraintTable::new())
    }

    /// Tree backed by a caller-provided host engine.
    pub fn with_host(host: impl ConstraintHost + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(TreeState {
                boxes: Vec::new(),
                host: Box::new(host),
                logger: Logger::disabled(),
                metrics: LayoutMetrics::new(),
            })),
        }
    }

    /// Routes diagnostics to the given logger.
    pub fn with_logger(self, logger: Logger) -> Self {
        self.state.borrow_mut().logger = logger;
        self
    }

    /// Creates a parentless box. Use [`BoxRef::layout_in`] or
    /// [`BoxTree::insert`] to place it in the hierarchy.
    pub fn create_box(&self, name: impl Into<String>) -> BoxRef {
        let id = self
            .state
            .borrow_mut()
            .push_node(name.into(), ParticipantKind::Box);
        BoxRef::new(Rc::downgrade(&self.state), id)
    }

    /// Creates an unattached layout guide.
    pub fn create_guide(&self, name: impl Into<String>) -> GuideRef {
        let id = self
            .state
            .borrow_mut()
            .push_node(name.into(), ParticipantKind::Guide);
        GuideRef::new(Rc::downgrade(&self.state), id)
    }

    /// Makes `child` a child of `parent`, detaching it from any previous
    /// parent first.
    pub fn insert(&self, child: &BoxRef, parent: &BoxRef) -> Result<()> {
        self.state.borrow_mut().attach(child.id(), parent.id())
    }

    /// Attaches a guide to an owning box.
    pub fn attach_guide(&self, guide: &GuideRef, owner: &BoxRef) -> Result<()> {
        self.state.borrow_mut().attach(guide.id(), owner.id())
    }

    /// Removes a box (or guide) from the tree, invalidating outstanding
    /// handles. Children become parentless; role guides die with their
    /// owner. Installed host constraints are untouched — deactivating or
    /// destroying them is the owning builder's call.
    pub fn remove(&self, id: BoxId) -> Result<()> {
        self.state.borrow_mut().remove(id)
    }

    /// Parent handle of the given box, if it has one.
    pub fn parent_of(&self, item: &BoxRef) -> Option<BoxRef> {
        let parent = self.state.borrow().parent_of(item.id())?;
        Some(BoxRef::new(Rc::downgrade(&self.state), parent))
    }

    /// Role guide of a box, creating it on first request.
    pub fn role_guide(&self, owner: &BoxRef, role: GuideRole) -> GuideRef {
        let id = self.state.borrow_mut().role_guide(owner.id(), role);
        match id {
            Some(id) => GuideRef::new(Rc::downgrade(&self.state), id),
            None => {
                self.state.borrow_mut().warn(
                    "role guide requested for released box",
                    fields_for(owner.id(), role),
                );
                GuideRef::new(Rc::downgrade(&self.state), BoxId::INVALID)
            }
        }
    }

    /// Counters accumulated so far.
    pub fn metrics(&self) -> MetricSnapshot {
        self.state.borrow().metrics.snapshot()
    }

    /// Number of constraints currently installed at the host.
    pub fn constraints_installed(&self) -> usize {
        self.state.borrow().host.installed()
    }

    /// Installed spec behind a constraint handle, if still present.
    pub fn constraint_spec(&self, id: ConstraintId) -> Option<ConstraintSpec> {
        self.state.borrow().host.spec(id)
    }

    pub(crate) fn from_state(state: &Rc<RefCell<TreeState>>) -> Self {
        Self {
            state: Rc::clone(state),
        }
    }
}

fn fields_for(owner: BoxId, role: GuideRole) -> LogFields {
    let mut fields = LogFields::new();
    let (k, v) = json_kv("box", json!(owner.value()));
    fields.insert(k, v);
    let (k, v) = json_kv("role", json!(role.name()));
    fields.insert(k, v);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_builds_parent_links() {
        let tree = BoxTree::new();
        let parent = tree.create_box("parent");
        let child = tree.create_box("child");
        tree.insert(&child, &parent).unwrap();

        assert_eq!(tree.parent_of(&child).map(|p| p.id()), Some(parent.id()));
    }

    #[test]
    fn reinsert_moves_between_parents() {
        let tree = BoxTree::new();
        let first = tree.create_box("first");
        let second = tree.create_box("second");
        let child = tree.create_box("child");

        tree.insert(&child, &first).unwrap();
        tree.insert(&child, &second).unwrap();
        assert_eq!(tree.parent_of(&child).map(|p| p.id()), Some(second.id()));
    }

    #[test]
    fn insertion_cycle_is_rejected() {
        let tree = BoxTree::new();
        let a = tree.create_box("a");
        let b = tree.create_box("b");
        tree.insert(&b, &a).unwrap();

        let err = tree.insert(&a, &b).unwrap_err();
        assert!(matches!(err, LayoutError::HierarchyCycle { .. }));
    }

    #[test]
    fn removal_invalidates_handles_and_orphans_children() {
        let tree = BoxTree::new();
        let parent = tree.create_box("parent");
        let child = tree.create_box("child");
        tree.insert(&child, &parent).unwrap();

        tree.remove(parent.id()).unwrap();
        assert!(!parent.is_alive());
        assert!(child.is_alive());
        assert_eq!(tree.parent_of(&child).map(|p| p.id()), None);

        assert!(matches!(
            tree.remove(parent.id()),
            Err(LayoutError::BoxNotFound(_))
        ));
    }

    #[test]
    fn role_guides_are_created_once() {
        let tree = BoxTree::new();
        let panel = tree.create_box("panel");

        let first = tree.role_guide(&panel, GuideRole::SafeArea);
        let second = tree.role_guide(&panel, GuideRole::SafeArea);
        assert_eq!(first.id(), second.id());
        assert!(first.is_alive());
    }

    #[test]
    fn role_guides_die_with_owner() {
        let tree = BoxTree::new();
        let panel = tree.create_box("panel");
        let guide = tree.role_guide(&panel, GuideRole::Margins);

        tree.remove(panel.id()).unwrap();
        assert!(!guide.is_alive());
    }
}
