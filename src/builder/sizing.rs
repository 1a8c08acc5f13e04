use super::core::LayoutBuilder;
use crate::anchor::{AnchorKind, AnchorProviding, DimAnchor};
use crate::geometry::Size;
use crate::relation::{DimensionRelation, Relation};

/// Width, height, size, and aspect operations.
impl LayoutBuilder {
    /// Subject width against a bare constant.
    pub fn width(self, relation: impl Into<Relation>) -> Self {
        self.connect_dim_const(AnchorKind::Width, relation.into())
    }

    /// Subject height against a bare constant.
    pub fn height(self, relation: impl Into<Relation>) -> Self {
        self.connect_dim_const(AnchorKind::Height, relation.into())
    }

    /// Subject width equal to another item's width.
    pub fn width_to(self, item: &impl AnchorProviding) -> Self {
        self.width_to_anchor(item.width_anchor())
    }

    /// Subject height equal to another item's height.
    pub fn height_to(self, item: &impl AnchorProviding) -> Self {
        self.height_to_anchor(item.height_anchor())
    }

    /// Subject width equal to an arbitrary dimension anchor.
    pub fn width_to_anchor(self, anchor: DimAnchor) -> Self {
        self.width_rel(DimensionRelation::equal(anchor))
    }

    /// Subject height equal to an arbitrary dimension anchor.
    pub fn height_to_anchor(self, anchor: DimAnchor) -> Self {
        self.height_rel(DimensionRelation::equal(anchor))
    }

    /// Full-control width relation (target dimension, multiplier,
    /// constant, priority).
    pub fn width_rel(self, relation: DimensionRelation) -> Self {
        self.connect_dim(AnchorKind::Width, relation)
    }

    /// Full-control height relation.
    pub fn height_rel(self, relation: DimensionRelation) -> Self {
        self.connect_dim(AnchorKind::Height, relation)
    }

    /// Width and height at once. A bare number gives a square.
    pub fn size(self, size: impl Into<Size>) -> Self {
        let size = size.into();
        self.width(size.width).height(size.height)
    }

    /// Reciprocal 1:1 aspect: width equal to own height and height equal
    /// to own width. Other ratios need the multiplier-bearing
    /// [`width_rel`](Self::width_rel) / [`height_rel`](Self::height_rel)
    /// primitives; this convenience covers only the square case.
    pub fn aspect(self) -> Self {
        let own_height = DimAnchor(self.subject_anchor(AnchorKind::Height));
        let own_width = DimAnchor(self.subject_anchor(AnchorKind::Width));
        self.width_to_anchor(own_height).height_to_anchor(own_width)
    }
}

#[cfg(test)]
mod tests {
    use crate::anchor::{AnchorKind, AnchorProviding};
    use crate::relation::{DimensionRelation, Priority, Relation};
    use crate::tree::BoxTree;

    #[test]
    fn constant_dimensions_have_no_target() {
        let tree = BoxTree::new();
        let panel = tree.create_box("panel");

        let layout = panel.layout().width(100).height(Relation::less_or_equal(50.0));
        let widths = layout.find_all(AnchorKind::Width);
        let heights = layout.find_all(AnchorKind::Height);
        assert_eq!(widths[0].target(), None);
        assert_eq!(widths[0].constant(), 100.0);
        assert_eq!(heights[0].target(), None);
        assert_eq!(heights[0].constant(), 50.0);
    }

    #[test]
    fn size_sets_width_and_height() {
        let tree = BoxTree::new();
        let panel = tree.create_box("panel");

        let layout = panel.layout().size(64);
        assert_eq!(layout.find_all(AnchorKind::Width)[0].constant(), 64.0);
        assert_eq!(layout.find_all(AnchorKind::Height)[0].constant(), 64.0);
    }

    #[test]
    fn width_to_targets_other_width() {
        let tree = BoxTree::new();
        let a = tree.create_box("a");
        let b = tree.create_box("b");

        let layout = a.layout().width_to(&b);
        let widths = layout.find_all(AnchorKind::Width);
        assert_eq!(widths.len(), 1);
        assert_eq!(widths[0].target(), Some(b.width_anchor().anchor()));
    }

    #[test]
    fn dimension_relation_keeps_modifiers() {
        let tree = BoxTree::new();
        let a = tree.create_box("a");
        let b = tree.create_box("b");

        let layout = a.layout().width_rel(
            DimensionRelation::greater_or_equal(b.width_anchor())
                .with_multiplier(2.0)
                .with_constant(10.0)
                .with_priority(Priority::LOW),
        );
        let spec = tree
            .constraint_spec(layout.find_all(AnchorKind::Width)[0].handle())
            .unwrap();
        assert_eq!(spec.multiplier, 2.0);
        assert_eq!(spec.constant, 10.0);
        assert_eq!(spec.priority, Priority::LOW);
    }

    #[test]
    fn aspect_cross_constrains_own_dimensions() {
        let tree = BoxTree::new();
        let panel = tree.create_box("panel");

        let layout = panel.layout().aspect();
        let widths = layout.find_all(AnchorKind::Width);
        let heights = layout.find_all(AnchorKind::Height);
        assert_eq!(widths[0].target(), Some(panel.height_anchor().anchor()));
        assert_eq!(heights[0].target(), Some(panel.width_anchor().anchor()));

        let spec = tree.constraint_spec(widths[0].handle()).unwrap();
        assert_eq!(spec.multiplier, 1.0);
    }
}
