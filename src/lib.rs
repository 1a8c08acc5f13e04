//! Fluent box-constraint description with batch lifecycle.
//!
//! `tether` turns verbose constraint construction into chainable
//! expressions: pin edges, set sizes, then activate the whole batch in one
//! call. It never solves anything — descriptions are handed to a
//! [`ConstraintHost`] (the actual layout engine) which owns enforcement
//! and geometry.
//!
//! ```
//! use tether::BoxTree;
//!
//! let tree = BoxTree::new();
//! let root = tree.create_box("root");
//! let panel = tree.create_box("panel");
//!
//! let layout = panel
//!     .layout_in(&root)
//!     .top(8)
//!     .leading(8)
//!     .size(120)
//!     .activate();
//! assert_eq!(layout.connections().len(), 4);
//! ```
//!
//! Misconfigured chains (no parent, released subject) never raise errors:
//! the offending call is skipped, one warning lands on the tree's
//! [`Logger`], and the chain keeps going. Watch the diagnostic channel —
//! or [`BoxTree::metrics`] — when a layout comes out wrong.

pub mod anchor;
pub mod builder;
pub mod connection;
pub mod distribute;
pub mod error;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod metrics;
pub mod relation;
pub mod tree;

pub use anchor::{
    Anchor, AnchorKind, AnchorProviding, Axis, BaselineProviding, DimAnchor, GuideProviding,
    GuideRole, XAnchor, YAnchor,
};
pub use builder::{BatchLayout, LayoutBuilder};
pub use connection::{Connection, ConnectionRelation};
pub use distribute::{
    distribute_horizontally, distribute_vertically, equal_heights, equal_widths,
};
pub use error::{LayoutError, Result};
pub use geometry::{Insets, Size};
pub use host::{ConstraintHost, ConstraintId, ConstraintSpec, ConstraintTable};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink, NullSink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use relation::{DimensionRelation, Priority, Relation, RelationOp};
pub use tree::{BoxId, BoxRef, BoxTree, GuideRef};
