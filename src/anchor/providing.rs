use super::core::{DimAnchor, XAnchor, YAnchor};
use crate::tree::GuideRef;

/// Participant exposing the basic edge, center, and dimension anchors.
pub trait AnchorProviding {
    fn left_anchor(&self) -> XAnchor;
    fn right_anchor(&self) -> XAnchor;
    fn leading_anchor(&self) -> XAnchor;
    fn trailing_anchor(&self) -> XAnchor;
    fn center_x_anchor(&self) -> XAnchor;
    fn top_anchor(&self) -> YAnchor;
    fn bottom_anchor(&self) -> YAnchor;
    fn center_y_anchor(&self) -> YAnchor;
    fn width_anchor(&self) -> DimAnchor;
    fn height_anchor(&self) -> DimAnchor;
}

/// Participant that additionally exposes text baselines.
///
/// Layout guides do not implement this; boxes do.
pub trait BaselineProviding: AnchorProviding {
    fn first_baseline_anchor(&self) -> YAnchor;
    fn last_baseline_anchor(&self) -> YAnchor;
}

/// Host-populated guide attached to a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideRole {
    SafeArea,
    Margins,
    ReadableContent,
}

impl GuideRole {
    pub(crate) fn name(self) -> &'static str {
        match self {
            GuideRole::SafeArea => "safe_area",
            GuideRole::Margins => "margins",
            GuideRole::ReadableContent => "readable_content",
        }
    }
}

/// Participant owning role guides (safe area, margins, readable content).
///
/// The guide is created on first request and reused afterwards; its
/// geometry is the host engine's business.
pub trait GuideProviding {
    fn guide(&self, role: GuideRole) -> GuideRef;
}
