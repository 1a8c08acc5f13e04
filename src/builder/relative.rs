use super::core::LayoutBuilder;
use crate::anchor::{AnchorKind, AnchorProviding, BaselineProviding, GuideProviding, GuideRole, XAnchor, YAnchor};
use crate::geometry::Insets;
use crate::relation::Relation;
use crate::tree::BoxRef;

/// Anchor-level primitives and the item-relative operations derived from
/// them.
///
/// Far edges (bottom, right, trailing) negate the relation before storing
/// it: in the box coordinate convention those edges sit at negative
/// offsets from their near counterparts, so "trailing with margin 8" is
/// recorded as constant `-8`.
impl LayoutBuilder {
    // Anchor-level primitives. One per kind; everything else in this file
    // is parameter substitution over these.

    pub fn top_to_anchor(self, relation: impl Into<Relation>, anchor: YAnchor) -> Self {
        self.connect_simple(AnchorKind::Top, anchor.anchor(), relation.into())
    }

    pub fn bottom_to_anchor(self, relation: impl Into<Relation>, anchor: YAnchor) -> Self {
        let relation: Relation = relation.into();
        self.connect_simple(AnchorKind::Bottom, anchor.anchor(), -relation)
    }

    pub fn left_to_anchor(self, relation: impl Into<Relation>, anchor: XAnchor) -> Self {
        self.connect_simple(AnchorKind::Left, anchor.anchor(), relation.into())
    }

    pub fn right_to_anchor(self, relation: impl Into<Relation>, anchor: XAnchor) -> Self {
        let relation: Relation = relation.into();
        self.connect_simple(AnchorKind::Right, anchor.anchor(), -relation)
    }

    pub fn leading_to_anchor(self, relation: impl Into<Relation>, anchor: XAnchor) -> Self {
        self.connect_simple(AnchorKind::Leading, anchor.anchor(), relation.into())
    }

    pub fn trailing_to_anchor(self, relation: impl Into<Relation>, anchor: XAnchor) -> Self {
        let relation: Relation = relation.into();
        self.connect_simple(AnchorKind::Trailing, anchor.anchor(), -relation)
    }

    pub fn center_x_to_anchor(self, relation: impl Into<Relation>, anchor: XAnchor) -> Self {
        self.connect_simple(AnchorKind::CenterX, anchor.anchor(), relation.into())
    }

    pub fn center_y_to_anchor(self, relation: impl Into<Relation>, anchor: YAnchor) -> Self {
        self.connect_simple(AnchorKind::CenterY, anchor.anchor(), relation.into())
    }

    pub fn first_baseline_to_anchor(self, relation: impl Into<Relation>, anchor: YAnchor) -> Self {
        if self.reject_baseline_for_guides("first_baseline") {
            return self;
        }
        self.connect_simple(AnchorKind::FirstBaseline, anchor.anchor(), relation.into())
    }

    pub fn last_baseline_to_anchor(self, relation: impl Into<Relation>, anchor: YAnchor) -> Self {
        if self.reject_baseline_for_guides("last_baseline") {
            return self;
        }
        self.connect_simple(AnchorKind::LastBaseline, anchor.anchor(), relation.into())
    }

    // Item-level forms: constrain against the same-kind anchor of another
    // participant.

    pub fn top_to(self, relation: impl Into<Relation>, item: &impl AnchorProviding) -> Self {
        self.top_to_anchor(relation, item.top_anchor())
    }

    pub fn bottom_to(self, relation: impl Into<Relation>, item: &impl AnchorProviding) -> Self {
        self.bottom_to_anchor(relation, item.bottom_anchor())
    }

    pub fn left_to(self, relation: impl Into<Relation>, item: &impl AnchorProviding) -> Self {
        self.left_to_anchor(relation, item.left_anchor())
    }

    pub fn right_to(self, relation: impl Into<Relation>, item: &impl AnchorProviding) -> Self {
        self.right_to_anchor(relation, item.right_anchor())
    }

    pub fn leading_to(self, relation: impl Into<Relation>, item: &impl AnchorProviding) -> Self {
        self.leading_to_anchor(relation, item.leading_anchor())
    }

    pub fn trailing_to(self, relation: impl Into<Relation>, item: &impl AnchorProviding) -> Self {
        self.trailing_to_anchor(relation, item.trailing_anchor())
    }

    pub fn center_x_to(self, relation: impl Into<Relation>, item: &impl AnchorProviding) -> Self {
        self.center_x_to_anchor(relation, item.center_x_anchor())
    }

    pub fn center_y_to(self, relation: impl Into<Relation>, item: &impl AnchorProviding) -> Self {
        self.center_y_to_anchor(relation, item.center_y_anchor())
    }

    pub fn first_baseline_to(
        self,
        relation: impl Into<Relation>,
        item: &impl BaselineProviding,
    ) -> Self {
        self.first_baseline_to_anchor(relation, item.first_baseline_anchor())
    }

    pub fn last_baseline_to(
        self,
        relation: impl Into<Relation>,
        item: &impl BaselineProviding,
    ) -> Self {
        self.last_baseline_to_anchor(relation, item.last_baseline_anchor())
    }

    // Relative placement: subject sits above/below/before/after another
    // item.

    /// Subject's bottom against the item's top.
    pub fn above(self, relation: impl Into<Relation>, item: &impl AnchorProviding) -> Self {
        self.bottom_to_anchor(relation, item.top_anchor())
    }

    /// Subject's top against the item's bottom.
    pub fn below(self, relation: impl Into<Relation>, item: &impl AnchorProviding) -> Self {
        self.top_to_anchor(relation, item.bottom_anchor())
    }

    /// Subject's trailing against the item's leading.
    pub fn before(self, relation: impl Into<Relation>, item: &impl AnchorProviding) -> Self {
        self.trailing_to_anchor(relation, item.leading_anchor())
    }

    /// Subject's leading against the item's trailing.
    pub fn after(self, relation: impl Into<Relation>, item: &impl AnchorProviding) -> Self {
        self.leading_to_anchor(relation, item.trailing_anchor())
    }

    /// After `first` and before `second`, with the same relation on both
    /// sides.
    pub fn horizontally_between(
        self,
        relation: impl Into<Relation> + Copy,
        first: &impl AnchorProviding,
        second: &impl AnchorProviding,
    ) -> Self {
        self.after(relation, first).before(relation, second)
    }

    /// Below `first` and above `second`, with the same relation on both
    /// sides.
    pub fn vertically_between(
        self,
        relation: impl Into<Relation> + Copy,
        first: &impl AnchorProviding,
        second: &impl AnchorProviding,
    ) -> Self {
        self.below(relation, first).above(relation, second)
    }

    // Fill: all four directional edges at once.

    /// Top, leading, trailing, and bottom against the matching edges of
    /// `item`, inset by `margins`.
    pub fn fill(self, item: &impl AnchorProviding, margins: impl Into<Insets>) -> Self {
        let margins = margins.into();
        self.top_to(margins.top, item)
            .leading_to(margins.left, item)
            .trailing_to(margins.right, item)
            .bottom_to(margins.bottom, item)
    }

    /// Fill within the safe-area guide of `item`.
    pub fn fill_safe_area_of(self, item: &BoxRef) -> Self {
        let guide = item.guide(GuideRole::SafeArea);
        self.fill(&guide, 0.0)
    }

    /// Fill within the margins guide of `item`.
    pub fn fill_margins_of(self, item: &BoxRef) -> Self {
        let guide = item.guide(GuideRole::Margins);
        self.fill(&guide, 0.0)
    }

    /// Fill within the readable-content guide of `item`.
    pub fn fill_readable_of(self, item: &BoxRef) -> Self {
        let guide = item.guide(GuideRole::ReadableContent);
        self.fill(&guide, 0.0)
    }
}
