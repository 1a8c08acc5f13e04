//! Fluent accumulation of constraint descriptions for one subject box.
//!
//! Every operation moves the builder and hands it back, so independent
//! edges compose before a single [`LayoutBuilder::activate`]. Operations
//! whose ambient requirements are missing (no parent, released subject or
//! target) skip themselves, emit one diagnostic, and let the chain
//! continue — setup code never unwinds.

mod core;
mod parent;
mod queries;
mod relative;
mod sizing;

pub use core::{BatchLayout, LayoutBuilder};
