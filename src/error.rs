//! Error types for index construction and validation.

use thiserror::Error;

/// A specialized result type for index operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the indexes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A hash table was requested with no slots.
    #[error("hash table capacity must be greater than zero")]
    ZeroCapacity,

    /// A red-black tree failed validation.
    #[error("red-black invariant violated: {0}")]
    Invariant(#[from] Violation),
}

/// A broken structural invariant found by [`crate::BalancedTree::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The root node is red.
    #[error("root is red")]
    RedRoot,

    /// A red node has a red child.
    #[error("red node {key:?} has a red child")]
    RedChild {
        /// Key of the red parent.
        key: String,
    },

    /// The two subtrees of a node have different black heights.
    #[error("black height differs under {key:?}: left {left}, right {right}")]
    BlackHeight {
        /// Key of the unbalanced node.
        key: String,
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },

    /// A child is on the wrong side of its parent.
    #[error("child of {key:?} is out of order")]
    Order {
        /// Key of the parent.
        key: String,
    },

    /// A child's parent link does not point back at its parent.
    #[error("broken parent link under {key:?}")]
    ParentLink {
        /// Key of the parent.
        key: String,
    },
}
