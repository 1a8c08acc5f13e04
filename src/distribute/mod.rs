//! Multi-box layout helpers: even stacking along an axis and pairwise
//! equal-dimension groups.

mod core;

pub use core::{distribute_horizontally, distribute_vertically, equal_heights, equal_widths};
