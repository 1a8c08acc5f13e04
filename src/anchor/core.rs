use crate::tree::BoxId;

/// Semantic edge, axis-center, dimension, or baseline of a box.
///
/// `Leading`/`Trailing` are writing-direction aware; `Left`/`Right` are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    Left,
    Right,
    Leading,
    Trailing,
    Top,
    Bottom,
    Width,
    Height,
    CenterX,
    CenterY,
    FirstBaseline,
    LastBaseline,
}

/// Geometric axis an anchor kind participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    Dimension,
}

impl AnchorKind {
    pub fn axis(self) -> Axis {
        match self {
            AnchorKind::Left
            | AnchorKind::Right
            | AnchorKind::Leading
            | AnchorKind::Trailing
            | AnchorKind::CenterX => Axis::Horizontal,
            AnchorKind::Top
            | AnchorKind::Bottom
            | AnchorKind::CenterY
            | AnchorKind::FirstBaseline
            | AnchorKind::LastBaseline => Axis::Vertical,
            AnchorKind::Width | AnchorKind::Height => Axis::Dimension,
        }
    }
}

/// One endpoint of a constraint: a specific anchor kind of a specific box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub box_id: BoxId,
    pub kind: AnchorKind,
}

impl Anchor {
    pub(crate) const fn new(box_id: BoxId, kind: AnchorKind) -> Self {
        Self { box_id, kind }
    }
}

/// Horizontal-axis anchor. Only combines with other horizontal anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XAnchor(pub(crate) Anchor);

/// Vertical-axis anchor. Only combines with other vertical anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YAnchor(pub(crate) Anchor);

/// Dimension anchor (width or height). Only combines with dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimAnchor(pub(crate) Anchor);

impl XAnchor {
    pub fn anchor(self) -> Anchor {
        self.0
    }
}

impl YAnchor {
    pub fn anchor(self) -> Anchor {
        self.0
    }
}

impl DimAnchor {
    pub fn anchor(self) -> Anchor {
        self.0
    }
}

impl From<XAnchor> for Anchor {
    fn from(anchor: XAnchor) -> Self {
        anchor.0
    }
}

impl From<YAnchor> for Anchor {
    fn from(anchor: YAnchor) -> Self {
        anchor.0
    }
}

impl From<DimAnchor> for Anchor {
    fn from(anchor: DimAnchor) -> Self {
        anchor.0
    }
}
