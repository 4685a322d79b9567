//! Full-traversal invariant check.

use std::fmt::Debug;

use super::node::{Node, is_red};
use crate::error::InvariantViolation;

/// Checks every red-black rule and the search-tree ordering below `root`.
///
/// Unlike [`black_height`](super::metrics::black_height), every root-to-leaf
/// path is measured and compared.
///
/// # Errors
///
/// Returns the first [`InvariantViolation`] met in a depth-first walk.
pub fn validate<K: Ord + Debug>(root: Option<&Node<K>>) -> Result<(), InvariantViolation> {
    if is_red(root) {
        return Err(InvariantViolation::RedRoot);
    }
    let mut walk = Walk {
        expected_black_height: None,
        previous: None,
    };
    walk.visit(root, 0)
}

struct Walk<'a, K> {
    expected_black_height: Option<usize>,
    previous: Option<&'a K>,
}

impl<'a, K: Ord + Debug> Walk<'a, K> {
    fn visit(
        &mut self,
        node: Option<&'a Node<K>>,
        blacks_above: usize,
    ) -> Result<(), InvariantViolation> {
        let Some(node) = node else {
            return self.reach_leaf(blacks_above);
        };

        if is_red(node.right()) {
            return Err(InvariantViolation::RedRightLink {
                key: format!("{:?}", node.key),
            });
        }
        if node.is_red() && is_red(node.left()) {
            return Err(InvariantViolation::ConsecutiveRedLinks {
                key: format!("{:?}", node.key),
            });
        }

        let blacks = blacks_above + usize::from(!node.is_red());
        self.visit(node.left(), blacks)?;

        if self.previous.is_some_and(|previous| node.key < *previous) {
            return Err(InvariantViolation::OutOfOrder {
                key: format!("{:?}", node.key),
            });
        }
        self.previous = Some(&node.key);

        self.visit(node.right(), blacks)
    }

    fn reach_leaf(&mut self, blacks: usize) -> Result<(), InvariantViolation> {
        match self.expected_black_height {
            None => {
                self.expected_black_height = Some(blacks);
                Ok(())
            }
            Some(expected) if expected == blacks => Ok(()),
            Some(expected) => Err(InvariantViolation::BlackHeightMismatch {
                expected,
                found: blacks,
            }),
        }
    }
}
