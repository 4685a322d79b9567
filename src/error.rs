//! Error types for the LLRB tree.
//!
//! [`InvariantViolation`] describes the first broken red-black rule found by
//! [`LlrbTree::validate`](crate::LlrbTree::validate). [`TreeError`] is returned
//! by the fail-fast mutation variants such as
//! [`LlrbTree::try_delete`](crate::LlrbTree::try_delete).

/// A red-black or ordering rule that does not hold for a tree.
///
/// Keys are carried in their `Debug` rendering so that the error type stays
/// independent of the key type.
///
/// # Examples
///
/// ```rust
/// use llrb::InvariantViolation;
///
/// let violation = InvariantViolation::RedRightLink { key: "7".to_string() };
/// assert_eq!(format!("{violation}"), "node 7 has a red right link");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root of a non-empty tree is red.
    RedRoot,
    /// A node has a red right child.
    RedRightLink {
        /// The key of the offending parent node.
        key: String,
    },
    /// A red node has a red left child.
    ConsecutiveRedLinks {
        /// The key of the upper red node.
        key: String,
    },
    /// Two root-to-leaf paths cross a different number of black nodes.
    BlackHeightMismatch {
        /// Black count of the first path that was measured.
        expected: usize,
        /// Black count of the path that disagreed.
        found: usize,
    },
    /// An in-order walk produced a key smaller than its predecessor.
    OutOfOrder {
        /// The key that broke the ascending order.
        key: String,
    },
    /// The cached length disagrees with the number of nodes.
    LengthMismatch {
        /// The length the tree reports.
        cached: usize,
        /// The number of nodes actually reachable from the root.
        actual: usize,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RedRoot => write!(formatter, "root is red"),
            Self::RedRightLink { key } => write!(formatter, "node {key} has a red right link"),
            Self::ConsecutiveRedLinks { key } => {
                write!(formatter, "red node {key} has a red left child")
            }
            Self::BlackHeightMismatch { expected, found } => write!(
                formatter,
                "black height mismatch: expected {expected} black nodes on every path, found {found}"
            ),
            Self::OutOfOrder { key } => write!(formatter, "key {key} is out of order"),
            Self::LengthMismatch { cached, actual } => write!(
                formatter,
                "length mismatch: tree reports {cached} keys but holds {actual}"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Errors reported by the fail-fast tree operations.
///
/// # Examples
///
/// ```rust
/// use llrb::{LlrbTree, TreeError};
///
/// let mut tree: LlrbTree<i32> = LlrbTree::new();
/// assert_eq!(tree.try_delete(&1), Err(TreeError::EmptyTree));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A deletion was requested on a tree with no nodes.
    EmptyTree,
    /// A deletion was requested for a key the tree does not hold.
    KeyNotFound,
    /// The tree no longer satisfies its structural invariants.
    Invariant(InvariantViolation),
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTree => write!(formatter, "cannot delete from an empty tree"),
            Self::KeyNotFound => write!(formatter, "key not found"),
            Self::Invariant(violation) => write!(formatter, "invariant violated: {violation}"),
        }
    }
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invariant(violation) => Some(violation),
            Self::EmptyTree | Self::KeyNotFound => None,
        }
    }
}

impl From<InvariantViolation> for TreeError {
    fn from(violation: InvariantViolation) -> Self {
        Self::Invariant(violation)
    }
}
