use std::ops::Neg;

use crate::anchor::DimAnchor;

/// Constraint priority weight. Higher binds harder.
///
/// [`Priority::REQUIRED`] is the sentinel the host engine must not violate;
/// anything below it may be broken to satisfy stronger constraints.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Priority(pub f32);

impl Priority {
    pub const REQUIRED: Priority = Priority(1000.0);
    pub const HIGH: Priority = Priority(750.0);
    pub const LOW: Priority = Priority(250.0);

    pub fn is_required(self) -> bool {
        self.0 >= Self::REQUIRED.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::REQUIRED
    }
}

/// Comparison operator of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationOp {
    Equal,
    LessOrEqual,
    GreaterOrEqual,
}

/// Desired numeric relationship against an implied target anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Relation {
    Equal { to: f32, priority: Priority },
    LessOrEqual { to: f32, priority: Priority },
    GreaterOrEqual { to: f32, priority: Priority },
}

impl Relation {
    /// `equal` at required priority.
    pub fn equal(to: f32) -> Self {
        Relation::Equal {
            to,
            priority: Priority::REQUIRED,
        }
    }

    /// `lessThanOrEqual` at required priority.
    pub fn less_or_equal(to: f32) -> Self {
        Relation::LessOrEqual {
            to,
            priority: Priority::REQUIRED,
        }
    }

    /// `greaterThanOrEqual` at required priority.
    pub fn greater_or_equal(to: f32) -> Self {
        Relation::GreaterOrEqual {
            to,
            priority: Priority::REQUIRED,
        }
    }

    pub fn with_priority(self, priority: Priority) -> Self {
        match self {
            Relation::Equal { to, .. } => Relation::Equal { to, priority },
            Relation::LessOrEqual { to, .. } => Relation::LessOrEqual { to, priority },
            Relation::GreaterOrEqual { to, .. } => Relation::GreaterOrEqual { to, priority },
        }
    }

    pub fn offset(&self) -> f32 {
        match *self {
            Relation::Equal { to, .. }
            | Relation::LessOrEqual { to, .. }
            | Relation::GreaterOrEqual { to, .. } => to,
        }
    }

    pub fn priority(&self) -> Priority {
        match *self {
            Relation::Equal { priority, .. }
            | Relation::LessOrEqual { priority, .. }
            | Relation::GreaterOrEqual { priority, .. } => priority,
        }
    }

    pub fn op(&self) -> RelationOp {
        match self {
            Relation::Equal { .. } => RelationOp::Equal,
            Relation::LessOrEqual { .. } => RelationOp::LessOrEqual,
            Relation::GreaterOrEqual { .. } => RelationOp::GreaterOrEqual,
        }
    }
}

/// Flips the offset sign and swaps `<=` with `>=`.
///
/// Trailing, bottom, and right edges are expressed as negative offsets from
/// the matching near edge, so "trailing with margin 8" is `-(equal 8)`.
impl Neg for Relation {
    type Output = Relation;

    fn neg(self) -> Relation {
        match self {
            Relation::Equal { to, priority } => Relation::Equal { to: -to, priority },
            Relation::LessOrEqual { to, priority } => Relation::GreaterOrEqual { to: -to, priority },
            Relation::GreaterOrEqual { to, priority } => Relation::LessOrEqual { to: -to, priority },
        }
    }
}

impl From<f32> for Relation {
    fn from(to: f32) -> Self {
        Relation::equal(to)
    }
}

impl From<f64> for Relation {
    fn from(to: f64) -> Self {
        Relation::equal(to as f32)
    }
}

impl From<i32> for Relation {
    fn from(to: i32) -> Self {
        Relation::equal(to as f32)
    }
}

/// Relationship against another box's dimension, scaled and offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DimensionRelation {
    Equal {
        to: DimAnchor,
        multiplier: f32,
        constant: f32,
        priority: Priority,
    },
    LessOrEqual {
        to: DimAnchor,
        multiplier: f32,
        constant: f32,
        priority: Priority,
    },
    GreaterOrEqual {
        to: DimAnchor,
        multiplier: f32,
        constant: f32,
        priority: Priority,
    },
}

impl DimensionRelation {
    /// `equal` with multiplier 1, constant 0, required priority.
    pub fn equal(to: DimAnchor) -> Self {
        DimensionRelation::Equal {
            to,
            multiplier: 1.0,
            constant: 0.0,
            priority: Priority::REQUIRED,
        }
    }

    /// `lessThanOrEqual` with multiplier 1, constant 0, required priority.
    pub fn less_or_equal(to: DimAnchor) -> Self {
        DimensionRelation::LessOrEqual {
            to,
            multiplier: 1.0,
            constant: 0.0,
            priority: Priority::REQUIRED,
        }
    }

    /// `greaterThanOrEqual` with multiplier 1, constant 0, required priority.
    pub fn greater_or_equal(to: DimAnchor) -> Self {
        DimensionRelation::GreaterOrEqual {
            to,
            multiplier: 1.0,
            constant: 0.0,
            priority: Priority::REQUIRED,
        }
    }

    pub fn with_multiplier(self, multiplier: f32) -> Self {
        self.map(|to, _, constant, priority| (to, multiplier, constant, priority))
    }

    pub fn with_constant(self, constant: f32) -> Self {
        self.map(|to, multiplier, _, priority| (to, multiplier, constant, priority))
    }

    pub fn with_priority(self, priority: Priority) -> Self {
        self.map(|to, multiplier, constant, _| (to, multiplier, constant, priority))
    }

    pub fn target(&self) -> DimAnchor {
        match *self {
            DimensionRelation::Equal { to, .. }
            | DimensionRelation::LessOrEqual { to, .. }
            | DimensionRelation::GreaterOrEqual { to, .. } => to,
        }
    }

    pub fn multiplier(&self) -> f32 {
        match *self {
            DimensionRelation::Equal { multiplier, .. }
            | DimensionRelation::LessOrEqual { multiplier, .. }
            | DimensionRelation::GreaterOrEqual { multiplier, .. } => multiplier,
        }
    }

    pub fn constant(&self) -> f32 {
        match *self {
            DimensionRelation::Equal { constant, .. }
            | DimensionRelation::LessOrEqual { constant, .. }
            | DimensionRelation::GreaterOrEqual { constant, .. } => constant,
        }
    }

    pub fn priority(&self) -> Priority {
        match *self {
            DimensionRelation::Equal { priority, .. }
            | DimensionRelation::LessOrEqual { priority, .. }
            | DimensionRelation::GreaterOrEqual { priority, .. } => priority,
        }
    }

    pub fn op(&self) -> RelationOp {
        match self {
            DimensionRelation::Equal { .. } => RelationOp::Equal,
            DimensionRelation::LessOrEqual { .. } => RelationOp::LessOrEqual,
            DimensionRelation::GreaterOrEqual { .. } => RelationOp::GreaterOrEqual,
        }
    }

    fn map(self, f: impl FnOnce(DimAnchor, f32, f32, Priority) -> (DimAnchor, f32, f32, Priority)) -> Self {
        match self {
            DimensionRelation::Equal {
                to,
                multiplier,
                constant,
                priority,
            } => {
                let (to, multiplier, constant, priority) = f(to, multiplier, constant, priority);
                DimensionRelation::Equal {
                    to,
                    multiplier,
                    constant,
                    priority,
                }
            }
            DimensionRelation::LessOrEqual {
                to,
                multiplier,
                constant,
                priority,
            } => {
                let (to, multiplier, constant, priority) = f(to, multiplier, constant, priority);
                DimensionRelation::LessOrEqual {
                    to,
                    multiplier,
                    constant,
                    priority,
                }
            }
            DimensionRelation::GreaterOrEqual {
                to,
                multiplier,
                constant,
                priority,
            } => {
                let (to, multiplier, constant, priority) = f(to, multiplier, constant, priority);
                DimensionRelation::GreaterOrEqual {
                    to,
                    multiplier,
                    constant,
                    priority,
                }
            }
        }
    }
}
