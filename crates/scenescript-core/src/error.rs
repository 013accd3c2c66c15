//! Error types for scenescript-core.

use thiserror::Error;

/// Result type for scene loading operations.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors that can occur while loading or linking a scene description.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A node names a parent that does not exist (or itself).
    #[error("node {node} has invalid parent index {parent}")]
    InvalidParent {
        /// Index of the offending node.
        node: usize,
        /// Parent index it refers to.
        parent: usize,
    },

    /// Following parent links from a node leads back to it.
    #[error("parent links form a cycle through node {node}")]
    CyclicParent {
        /// A node on the cycle.
        node: usize,
    },

    /// A node refers to a material outside the scene's material list.
    #[error("node {node} refers to missing material {material}")]
    InvalidMaterial {
        /// Index of the offending node.
        node: usize,
        /// Material index it refers to.
        material: usize,
    },

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
