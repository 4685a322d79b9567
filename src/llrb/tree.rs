//! Owning, value-semantic LLRB tree.
//!
//! [`LlrbTree`] holds the root of the tree and a cached node count. Mutations
//! consume the tree and return the updated one, so the root is always threaded
//! through the caller explicitly:
//!
//! ```rust
//! use llrb::LlrbTree;
//!
//! let tree = LlrbTree::new().insert(2).insert(1).insert(3);
//! let tree = tree.delete(&2);
//! assert_eq!(tree.in_order(), vec![1, 3]);
//! ```

use std::fmt;

use static_assertions::assert_impl_all;

use super::deletion::{delete, minimum};
use super::insertion::insert;
use super::metrics::{black_height, black_node_count, node_count, total_height};
use super::node::{Link, Node};
use super::search::{collect_in_order, contains, count, maximum};
use super::validation::validate;
use crate::error::{InvariantViolation, TreeError};

/// An ordered key container backed by a left-leaning red-black tree.
///
/// Keys equal to an existing key are stored again, to the right of it; the
/// container is a multiset.
///
/// # Time Complexity
///
/// | Operation                        | Complexity |
/// |----------------------------------|------------|
/// | `new`                            | O(1)       |
/// | `insert`                         | O(log N)   |
/// | `delete`                         | O(log N)   |
/// | `contains`                       | O(log N)   |
/// | `min`/`max`                      | O(log N)   |
/// | `len`/`is_empty`                 | O(1)       |
/// | `total_height`/`black_height`    | O(N)       |
/// | `black_node_count`/`validate`    | O(N)       |
///
/// # Thread safety
///
/// The tree is `Send` and `Sync` when `K` is, but mutation takes it by value;
/// sharing one tree between writers needs external locking.
///
/// # Examples
///
/// ```rust
/// use llrb::LlrbTree;
///
/// let tree: LlrbTree<i32> = [5, 1, 5, 3].into_iter().collect();
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.count(&5), 2);
/// assert_eq!(tree.min(), Some(&1));
/// ```
#[derive(Clone)]
pub struct LlrbTree<K> {
    /// Root node of the tree
    root: Link<K>,
    /// Number of nodes
    length: usize,
}

assert_impl_all!(LlrbTree<i32>: Send, Sync, Clone, Default);

impl<K> LlrbTree<K> {
    /// Creates a new empty tree.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of keys, counting duplicates.
    #[inline]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree holds no keys.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Consumes the tree and returns its root link.
    #[must_use]
    pub fn into_root(self) -> Link<K> {
        self.root
    }

    /// Number of edges on the longest root-to-leaf path, `-1` when empty.
    ///
    /// ```rust
    /// use llrb::LlrbTree;
    ///
    /// assert_eq!(LlrbTree::<i32>::new().total_height(), -1);
    /// assert_eq!(LlrbTree::singleton(1).total_height(), 0);
    /// ```
    pub fn total_height(&self) -> isize {
        total_height(self.root())
    }

    /// Largest number of black nodes on any root-to-leaf path.
    pub fn black_height(&self) -> usize {
        black_height(self.root())
    }

    /// Number of black nodes in the tree.
    pub fn black_node_count(&self) -> usize {
        black_node_count(self.root())
    }
}

impl<K: Ord> LlrbTree<K> {
    /// Creates a tree holding a single key.
    #[must_use]
    pub fn singleton(key: K) -> Self {
        Self::new().insert(key)
    }

    /// Inserts a key and returns the updated tree.
    ///
    /// An equal key already in the tree is kept; the new one is stored next
    /// to it.
    ///
    /// # Complexity
    ///
    /// O(log N)
    #[must_use]
    pub fn insert(self, key: K) -> Self {
        let length = self.length + 1;
        let root = insert(self.root, key);
        tracing::trace!(length, "inserted key");
        Self { root, length }
    }

    /// Returns `true` if the tree holds `key`.
    pub fn contains(&self, key: &K) -> bool {
        contains(self.root(), key)
    }

    /// Returns how many times `key` is stored.
    pub fn count(&self, key: &K) -> usize {
        count(self.root(), key)
    }

    /// Returns the smallest key.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|root| minimum(root).key())
    }

    /// Returns the largest key.
    pub fn max(&self) -> Option<&K> {
        maximum(self.root()).map(Node::key)
    }

    /// Returns references to all keys in ascending order.
    pub fn keys_in_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.length);
        collect_in_order(self.root(), &mut keys);
        keys
    }
}

impl<K: Ord + Clone> LlrbTree<K> {
    /// Removes one occurrence of `key` and returns the updated tree.
    ///
    /// Deleting from an empty tree, or deleting a key that is not stored,
    /// returns the tree unchanged.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb::LlrbTree;
    ///
    /// let tree = LlrbTree::new().insert(1).insert(2);
    /// let tree = tree.delete(&1).delete(&7);
    /// assert_eq!(tree.in_order(), vec![2]);
    /// ```
    #[must_use]
    pub fn delete(self, key: &K) -> Self {
        if !self.contains(key) {
            tracing::debug!(length = self.length, "delete of absent key is a no-op");
            return self;
        }
        let length = self.length - 1;
        let root = delete(self.root, key);
        tracing::trace!(length, "deleted key");
        Self { root, length }
    }

    /// Removes one occurrence of `key` in place, failing instead of ignoring
    /// an impossible request.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] when the tree has no keys and
    /// [`TreeError::KeyNotFound`] when `key` is not stored. The tree is left
    /// untouched in both cases.
    pub fn try_delete(&mut self, key: &K) -> Result<(), TreeError> {
        if self.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        if !self.contains(key) {
            return Err(TreeError::KeyNotFound);
        }
        *self = std::mem::take(self).delete(key);
        Ok(())
    }

    /// Returns all keys in ascending order, duplicates included.
    pub fn in_order(&self) -> Vec<K> {
        self.keys_in_order().into_iter().cloned().collect()
    }
}

impl<K: Ord + fmt::Debug> LlrbTree<K> {
    /// Checks that the tree satisfies every red-black rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found, including a cached
    /// length that disagrees with the nodes actually present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use llrb::LlrbTree;
    ///
    /// let tree: LlrbTree<i32> = (0..100).collect();
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        validate(self.root())?;
        let actual = node_count(self.root());
        if actual != self.length {
            return Err(InvariantViolation::LengthMismatch {
                cached: self.length,
                actual,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K> Default for LlrbTree<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for LlrbTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for LlrbTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            *self = std::mem::take(self).insert(key);
        }
    }
}

impl<K: Ord> PartialEq for LlrbTree<K> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.keys_in_order() == other.keys_in_order()
    }
}

impl<K: Ord> Eq for LlrbTree<K> {}

impl<K: Ord + fmt::Debug> fmt::Debug for LlrbTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.keys_in_order()).finish()
    }
}

impl<K: Ord + fmt::Display> fmt::Display for LlrbTree<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for key in self.keys_in_order() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
        }
        write!(formatter, "}}")
    }
}
