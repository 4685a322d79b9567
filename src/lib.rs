//! # llrb
//!
//! An ordered key container backed by a left-leaning red-black (LLRB) tree.
//!
//! ## Overview
//!
//! [`LlrbTree`] keeps its keys in a balanced binary search tree and restores
//! the red-black invariants after every insertion and deletion:
//!
//! - no two consecutive red links on any root-to-leaf path
//! - red links always lean left
//! - every root-to-leaf path crosses the same number of black nodes
//! - the root is black
//!
//! Besides the mutations, the tree answers three structural queries: total
//! height, black height and black node count.
//!
//! ## Example
//!
//! ```rust
//! use llrb::LlrbTree;
//!
//! let tree: LlrbTree<i32> = [29, 8, 20, 3, 9, 21, 2, 13].into_iter().collect();
//! assert_eq!(tree.total_height(), 3);
//! assert_eq!(tree.black_height(), 2);
//!
//! let tree = tree.delete(&9).delete(&13);
//! assert_eq!(tree.in_order(), vec![2, 3, 8, 20, 21, 29]);
//! assert!(tree.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use llrb::prelude::*;
///
/// let tree = LlrbTree::singleton(1);
/// assert_eq!(tree.len(), 1);
/// ```
pub mod prelude {
    pub use crate::error::{InvariantViolation, TreeError};
    pub use crate::llrb::{Color, LlrbTree, Node};
}

pub mod error;
pub mod llrb;

pub use error::{InvariantViolation, TreeError};
pub use llrb::{Color, LlrbTree, Node};
