use super::core::LayoutBuilder;
use crate::anchor::{Anchor, AnchorKind, DimAnchor, XAnchor, YAnchor};
use crate::geometry::Insets;
use crate::relation::{DimensionRelation, Relation};

/// Absolute-to-parent operations.
///
/// Each resolves the subject's current parent; a parentless subject turns
/// the call into a diagnosed no-op and the chain continues.
impl LayoutBuilder {
    pub fn top(self, relation: impl Into<Relation>) -> Self {
        let Some(parent) = self.parent_for("top") else {
            return self;
        };
        self.top_to_anchor(relation, YAnchor(Anchor::new(parent, AnchorKind::Top)))
    }

    pub fn bottom(self, relation: impl Into<Relation>) -> Self {
        let Some(parent) = self.parent_for("bottom") else {
            return self;
        };
        self.bottom_to_anchor(relation, YAnchor(Anchor::new(parent, AnchorKind::Bottom)))
    }

    pub fn left(self, relation: impl Into<Relation>) -> Self {
        let Some(parent) = self.parent_for("left") else {
            return self;
        };
        self.left_to_anchor(relation, XAnchor(Anchor::new(parent, AnchorKind::Left)))
    }

    pub fn right(self, relation: impl Into<Relation>) -> Self {
        let Some(parent) = self.parent_for("right") else {
            return self;
        };
        self.right_to_anchor(relation, XAnchor(Anchor::new(parent, AnchorKind::Right)))
    }

    pub fn leading(self, relation: impl Into<Relation>) -> Self {
        let Some(parent) = self.parent_for("leading") else {
            return self;
        };
        self.leading_to_anchor(relation, XAnchor(Anchor::new(parent, AnchorKind::Leading)))
    }

    pub fn trailing(self, relation: impl Into<Relation>) -> Self {
        let Some(parent) = self.parent_for("trailing") else {
            return self;
        };
        self.trailing_to_anchor(relation, XAnchor(Anchor::new(parent, AnchorKind::Trailing)))
    }

    pub fn center_x(self, relation: impl Into<Relation>) -> Self {
        let Some(parent) = self.parent_for("center_x") else {
            return self;
        };
        self.center_x_to_anchor(relation, XAnchor(Anchor::new(parent, AnchorKind::CenterX)))
    }

    pub fn center_y(self, relation: impl Into<Relation>) -> Self {
        let Some(parent) = self.parent_for("center_y") else {
            return self;
        };
        self.center_y_to_anchor(relation, YAnchor(Anchor::new(parent, AnchorKind::CenterY)))
    }

    /// Subject width against the parent width, scaled and offset.
    pub fn width_to_parent(self, multiplier: f32, constant: f32) -> Self {
        let Some(parent) = self.parent_for("width_to_parent") else {
            return self;
        };
        let target = DimAnchor(Anchor::new(parent, AnchorKind::Width));
        self.width_rel(
            DimensionRelation::equal(target)
                .with_multiplier(multiplier)
                .with_constant(constant),
        )
    }

    /// Subject height against the parent height, scaled and offset.
    pub fn height_to_parent(self, multiplier: f32, constant: f32) -> Self {
        let Some(parent) = self.parent_for("height_to_parent") else {
            return self;
        };
        let target = DimAnchor(Anchor::new(parent, AnchorKind::Height));
        self.height_rel(
            DimensionRelation::equal(target)
                .with_multiplier(multiplier)
                .with_constant(constant),
        )
    }

    /// Top, leading, trailing, and bottom against the parent, inset by
    /// `margins`.
    pub fn fill_parent(self, margins: impl Into<Insets>) -> Self {
        let margins = margins.into();
        self.top(margins.top)
            .leading(margins.left)
            .trailing(margins.right)
            .bottom(margins.bottom)
    }

    /// Same relation applied to all four parent edges.
    pub fn fill_parent_relation(self, relation: Relation) -> Self {
        self.top(relation)
            .leading(relation)
            .trailing(relation)
            .bottom(relation)
    }
}

#[cfg(test)]
mod tests {
    use crate::anchor::{AnchorKind, AnchorProviding};
    use crate::logging::{Logger, MemorySink};
    use crate::relation::{Priority, Relation};
    use crate::tree::{BoxRef, BoxTree};

    fn tree_with_sink() -> (BoxTree, MemorySink) {
        let sink = MemorySink::new();
        let tree = BoxTree::new().with_logger(Logger::new(sink.clone()));
        (tree, sink)
    }

    fn parent_and_child(tree: &BoxTree) -> (BoxRef, BoxRef) {
        let parent = tree.create_box("parent");
        let child = tree.create_box("child");
        tree.insert(&child, &parent).unwrap();
        (parent, child)
    }

    #[test]
    fn top_pins_to_parent_top_at_zero_required() {
        let (tree, _) = tree_with_sink();
        let (parent, child) = parent_and_child(&tree);

        let layout = child.layout().top(0);
        let tops = layout.find_all(AnchorKind::Top);
        assert_eq!(tops.len(), 1);
        assert_eq!(tops[0].simple_relation(), Some(Relation::equal(0.0)));
        assert_eq!(tops[0].target(), Some(parent.top_anchor().anchor()));
        assert!(tops[0].simple_relation().unwrap().priority().is_required());
    }

    #[test]
    fn far_edges_store_negated_constants() {
        let (tree, _) = tree_with_sink();
        let (_, child) = parent_and_child(&tree);

        let layout = child.layout().top(12).bottom(12).leading(4).trailing(4);
        assert_eq!(layout.find_all(AnchorKind::Top)[0].constant(), 12.0);
        assert_eq!(layout.find_all(AnchorKind::Bottom)[0].constant(), -12.0);
        assert_eq!(layout.find_all(AnchorKind::Leading)[0].constant(), 4.0);
        assert_eq!(layout.find_all(AnchorKind::Trailing)[0].constant(), -4.0);
    }

    #[test]
    fn inequalities_swap_on_far_edges() {
        let (tree, _) = tree_with_sink();
        let (_, child) = parent_and_child(&tree);

        let layout = child
            .layout()
            .bottom(Relation::greater_or_equal(10.0).with_priority(Priority::HIGH));
        let stored = layout.find_all(AnchorKind::Bottom)[0]
            .simple_relation()
            .unwrap();
        assert_eq!(
            stored,
            Relation::LessOrEqual {
                to: -10.0,
                priority: Priority::HIGH,
            }
        );
    }

    #[test]
    fn missing_parent_is_a_diagnosed_no_op() {
        let (tree, sink) = tree_with_sink();
        let orphan = tree.create_box("orphan");

        let layout = orphan.layout().left(0);
        assert!(layout.connections().is_empty());
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.events()[0].message, "no parent to constrain against");
        assert_eq!(tree.constraints_installed(), 0);
    }

    #[test]
    fn chain_survives_a_missing_parent_mid_way() {
        let (tree, sink) = tree_with_sink();
        let orphan = tree.create_box("orphan");

        // Parent ops drop out, the sizing op still lands.
        let layout = orphan.layout().top(0).leading(0).width(80);
        assert_eq!(layout.connections().len(), 1);
        assert_eq!(layout.find_all(AnchorKind::Width).len(), 1);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn fill_parent_produces_four_edges() {
        let (tree, _) = tree_with_sink();
        let (_, child) = parent_and_child(&tree);

        let layout = child.layout().fill_parent(8.0);
        assert_eq!(layout.connections().len(), 4);
        assert_eq!(layout.find_all(AnchorKind::Top)[0].constant(), 8.0);
        assert_eq!(layout.find_all(AnchorKind::Leading)[0].constant(), 8.0);
        assert_eq!(layout.find_all(AnchorKind::Trailing)[0].constant(), -8.0);
        assert_eq!(layout.find_all(AnchorKind::Bottom)[0].constant(), -8.0);
    }

    #[test]
    fn dimension_to_parent_carries_multiplier() {
        let (tree, _) = tree_with_sink();
        let (parent, child) = parent_and_child(&tree);

        let layout = child.layout().width_to_parent(0.5, -16.0);
        let widths = layout.find_all(AnchorKind::Width);
        assert_eq!(widths.len(), 1);
        assert_eq!(widths[0].target(), Some(parent.width_anchor().anchor()));

        let spec = tree_spec(&tree, &widths[0]);
        assert_eq!(spec.multiplier, 0.5);
        assert_eq!(spec.constant, -16.0);
    }

    fn tree_spec(
        tree: &BoxTree,
        connection: &crate::connection::Connection,
    ) -> crate::host::ConstraintSpec {
        tree.constraint_spec(connection.handle()).unwrap()
    }
}
