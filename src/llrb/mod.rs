//! Left-leaning red-black tree engine.
//!
//! The engine is split the way the algorithm is:
//!
//! - `node`: the color-tagged node and the color predicates
//! - `primitives`: rotations, color flips and the balance normalizer
//! - `insertion` / `deletion`: the recursive mutations
//! - `metrics`: read-only structural queries
//! - `search` / `validation`: lookups and the full invariant check
//! - `tree`: [`LlrbTree`], the owning façade most callers want
//!
//! Every mutation takes ownership of a subtree and returns the subtree root
//! that replaces it, so no node ever needs a parent pointer.
//!
//! # Examples
//!
//! ```rust
//! use llrb::llrb::raw;
//!
//! let mut root = None;
//! for key in [3, 1, 2] {
//!     root = raw::insert(root, key);
//! }
//! root = raw::delete(root, &1);
//!
//! assert_eq!(raw::total_height(root.as_deref()), 1);
//! assert_eq!(raw::black_node_count(root.as_deref()), 1);
//! ```

mod deletion;
mod insertion;
mod metrics;
mod node;
mod primitives;
mod search;
mod tree;
mod validation;

pub use node::{Color, Link, Node};
pub use tree::LlrbTree;

/// Free functions operating on a bare [`Link`].
///
/// These are the building blocks [`LlrbTree`] is made of. Callers that hold
/// the root themselves must reassign it with the value each mutation returns.
pub mod raw {
    pub use super::deletion::{delete, minimum, move_red_left, move_red_right};
    pub use super::insertion::insert;
    pub use super::metrics::{black_height, black_node_count, node_count, total_height};
    pub use super::primitives::{balance, flip_colors, rotate_left, rotate_right, split_four_node};
    pub use super::search::{contains, count};
    pub use super::validation::validate;
}
