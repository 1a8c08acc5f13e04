//! Anchor endpoints and the capability traits layout participants implement.
//!
//! Downstream code imports anchor types from here while the implementation
//! details live in the private `core` module.

mod core;
mod providing;

pub use core::{Anchor, AnchorKind, Axis, DimAnchor, XAnchor, YAnchor};
pub use providing::{AnchorProviding, BaselineProviding, GuideProviding, GuideRole};
