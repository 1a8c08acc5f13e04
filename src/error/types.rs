use thiserror::Error;

/// Unified result type for structural tree operations.
///
/// Builder chains never return these; misuse there degrades to a
/// diagnostic instead (see the crate docs on the failure policy).
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by explicit box-tree mutations.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("box `{0}` not found or already removed")]
    BoxNotFound(String),
    #[error("inserting `{child}` under `{parent}` would create a cycle")]
    HierarchyCycle { child: String, parent: String },
}
