use std::cell::RefCell;
use std::rc::Weak;

use serde_json::json;

use super::core::{BoxId, TreeState};
use crate::anchor::{
    Anchor, AnchorKind, AnchorProviding, BaselineProviding, DimAnchor, GuideProviding, GuideRole,
    XAnchor, YAnchor,
};
use crate::builder::LayoutBuilder;
use crate::logging::{LogFields, json_kv};

/// Non-owning handle to a box. Cloning does not extend the box's life.
#[derive(Clone)]
pub struct BoxRef {
    state: Weak<RefCell<TreeState>>,
    id: BoxId,
}

impl BoxRef {
    pub(crate) fn new(state: Weak<RefCell<TreeState>>, id: BoxId) -> Self {
        Self { state, id }
    }

    pub fn id(&self) -> BoxId {
        self.id
    }

    /// False once the box was removed or its tree dropped.
    pub fn is_alive(&self) -> bool {
        self.state
            .upgrade()
            .map(|state| state.borrow().is_alive(self.id))
            .unwrap_or(false)
    }

    /// Registered name, for diagnostics.
    pub fn name(&self) -> String {
        self.state
            .upgrade()
            .map(|state| state.borrow().name_of(self.id))
            .unwrap_or_else(|| "<released>".to_string())
    }

    /// Starts a builder for this box. The box is assumed to already sit in
    /// the hierarchy; parent-relative operations diagnose otherwise.
    pub fn layout(&self) -> LayoutBuilder {
        LayoutBuilder::for_subject(self.state.clone(), self.id)
    }

    /// Inserts this box as a child of `parent`, then starts a builder.
    ///
    /// A failed insertion (released handle, cycle) is downgraded to a
    /// diagnostic and the builder is returned regardless.
    pub fn layout_in(&self, parent: &BoxRef) -> LayoutBuilder {
        if let Some(state) = self.state.upgrade() {
            let attach = crate::tree::BoxTree::from_state(&state).insert(self, parent);
            if let Err(err) = attach {
                let mut fields = LogFields::new();
                let (k, v) = json_kv("child", json!(self.name()));
                fields.insert(k, v);
                let (k, v) = json_kv("error", json!(err.to_string()));
                fields.insert(k, v);
                state
                    .borrow_mut()
                    .warn("insertion before layout failed", fields);
            }
        }
        self.layout()
    }

    fn anchor(&self, kind: AnchorKind) -> Anchor {
        Anchor::new(self.id, kind)
    }
}

impl PartialEq for BoxRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BoxRef {}

impl std::fmt::Debug for BoxRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxRef")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}

impl AnchorProviding for BoxRef {
    fn left_anchor(&self) -> XAnchor {
        XAnchor(self.anchor(AnchorKind::Left))
    }

    fn right_anchor(&self) -> XAnchor {
        XAnchor(self.anchor(AnchorKind::Right))
    }

    fn leading_anchor(&self) -> XAnchor {
        XAnchor(self.anchor(AnchorKind::Leading))
    }

    fn trailing_anchor(&self) -> XAnchor {
        XAnchor(self.anchor(AnchorKind::Trailing))
    }

    fn center_x_anchor(&self) -> XAnchor {
        XAnchor(self.anchor(AnchorKind::CenterX))
    }

    fn top_anchor(&self) -> YAnchor {
        YAnchor(self.anchor(AnchorKind::Top))
    }

    fn bottom_anchor(&self) -> YAnchor {
        YAnchor(self.anchor(AnchorKind::Bottom))
    }

    fn center_y_anchor(&self) -> YAnchor {
        YAnchor(self.anchor(AnchorKind::CenterY))
    }

    fn width_anchor(&self) -> DimAnchor {
        DimAnchor(self.anchor(AnchorKind::Width))
    }

    fn height_anchor(&self) -> DimAnchor {
        DimAnchor(self.anchor(AnchorKind::Height))
    }
}

impl BaselineProviding for BoxRef {
    fn first_baseline_anchor(&self) -> YAnchor {
        YAnchor(self.anchor(AnchorKind::FirstBaseline))
    }

    fn last_baseline_anchor(&self) -> YAnchor {
        YAnchor(self.anchor(AnchorKind::LastBaseline))
    }
}

impl GuideProviding for BoxRef {
    fn guide(&self, role: GuideRole) -> GuideRef {
        match self.state.upgrade() {
            Some(state) => crate::tree::BoxTree::from_state(&state).role_guide(self, role),
            None => GuideRef::new(self.state.clone(), BoxId::INVALID),
        }
    }
}

/// Non-owning handle to a layout guide.
///
/// Guides expose the basic anchors but no baselines; they are rectangles,
/// not text.
#[derive(Clone)]
pub struct GuideRef {
    state: Weak<RefCell<TreeState>>,
    id: BoxId,
}

impl GuideRef {
    pub(crate) fn new(state: Weak<RefCell<TreeState>>, id: BoxId) -> Self {
        Self { state, id }
    }

    pub fn id(&self) -> BoxId {
        self.id
    }

    pub fn is_alive(&self) -> bool {
        self.state
            .upgrade()
            .map(|state| state.borrow().is_alive(self.id))
            .unwrap_or(false)
    }

    pub fn name(&self) -> String {
        self.state
            .upgrade()
            .map(|state| state.borrow().name_of(self.id))
            .unwrap_or_else(|| "<released>".to_string())
    }

    /// Starts a builder for this guide. Attach it to an owner first.
    pub fn layout(&self) -> LayoutBuilder {
        LayoutBuilder::for_subject(self.state.clone(), self.id)
    }

    /// Attaches this guide to `owner`, then starts a builder.
    pub fn layout_in(&self, owner: &BoxRef) -> LayoutBuilder {
        if let Some(state) = self.state.upgrade() {
            let attach = crate::tree::BoxTree::from_state(&state).attach_guide(self, owner);
            if let Err(err) = attach {
                let mut fields = LogFields::new();
                let (k, v) = json_kv("guide", json!(self.name()));
                fields.insert(k, v);
                let (k, v) = json_kv("error", json!(err.to_string()));
                fields.insert(k, v);
                state
                    .borrow_mut()
                    .warn("guide attachment before layout failed", fields);
            }
        }
        self.layout()
    }

    fn anchor(&self, kind: AnchorKind) -> Anchor {
        Anchor::new(self.id, kind)
    }
}

impl PartialEq for GuideRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GuideRef {}

impl std::fmt::Debug for GuideRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuideRef")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}

impl AnchorProviding for GuideRef {
    fn left_anchor(&self) -> XAnchor {
        XAnchor(self.anchor(AnchorKind::Left))
    }

    fn right_anchor(&self) -> XAnchor {
        XAnchor(self.anchor(AnchorKind::Right))
    }

    fn leading_anchor(&self) -> XAnchor {
        XAnchor(self.anchor(AnchorKind::Leading))
    }

    fn trailing_anchor(&self) -> XAnchor {
        XAnchor(self.anchor(AnchorKind::Trailing))
    }

    fn center_x_anchor(&self) -> XAnchor {
        XAnchor(self.anchor(AnchorKind::CenterX))
    }

    fn top_anchor(&self) -> YAnchor {
        YAnchor(self.anchor(AnchorKind::Top))
    }

    fn bottom_anchor(&self) -> YAnchor {
        YAnchor(self.anchor(AnchorKind::Bottom))
    }

    fn center_y_anchor(&self) -> YAnchor {
        YAnchor(self.anchor(AnchorKind::CenterY))
    }

    fn width_anchor(&self) -> DimAnchor {
        DimAnchor(self.anchor(AnchorKind::Width))
    }

    fn height_anchor(&self) -> DimAnchor {
        DimAnchor(self.anchor(AnchorKind::Height))
    }
}
