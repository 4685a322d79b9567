//! Recursive deletion.
//!
//! On the way down every frame makes sure the node it is about to descend
//! into is not a lone black 2-node, borrowing a red link from a sibling when
//! needed. The node that is finally removed is then always a red leaf in the
//! rotated shape, and removing it leaves black height untouched. Every frame
//! runs [`balance`] on the way back up to undo the temporary shapes.

use super::node::{Color, Link, Node, has_red_left_child, is_red};
use super::primitives::{balance, flip_colors, rotate_left, rotate_right};
use super::search::contains;

/// Deletes one occurrence of `key` below `root` and returns the new root.
///
/// Deleting from an empty tree, or deleting a key the tree does not hold, is
/// a no-op that returns `root` unchanged.
///
/// # Complexity
///
/// O(log N)
#[must_use]
pub fn delete<K: Ord + Clone>(root: Link<K>, key: &K) -> Link<K> {
    let mut root = root?;
    if !contains(Some(&*root), key) {
        return Some(root);
    }

    // Borrow the root's black link for the duration of the descent.
    if !is_red(root.left()) && !is_red(root.right()) {
        root.color = Color::Red;
    }

    let mut new_root = delete_from_node(root, key);
    if let Some(root) = new_root.as_deref_mut() {
        root.color = Color::Black;
    }
    new_root
}

/// Recursive helper for delete. `key` must be present below `node`.
fn delete_from_node<K: Ord + Clone>(mut node: Box<Node<K>>, key: &K) -> Link<K> {
    if *key < node.key {
        if !is_red(node.left()) && !has_red_left_child(node.left()) {
            node = move_red_left(node);
        }
        node.left = node
            .left
            .take()
            .and_then(|left| delete_from_node(left, key));
    } else {
        if is_red(node.left()) {
            node = rotate_right(node);
        }
        if *key == node.key && node.right.is_none() {
            return None;
        }
        if !is_red(node.right()) && !has_red_left_child(node.right()) {
            node = move_red_right(node);
        }
        if *key == node.key {
            // Replace with the in-order successor and remove the successor's node instead.
            let successor = node.right().map(|right| minimum(right).key.clone());
            if let Some(successor) = successor {
                node.right = node
                    .right
                    .take()
                    .and_then(|right| delete_from_node(right, &successor));
                node.key = successor;
            }
        } else {
            node.right = node
                .right
                .take()
                .and_then(|right| delete_from_node(right, key));
        }
    }
    Some(balance(node))
}

/// Makes `node.left` or one of its children red by borrowing from the right.
///
/// Assumes `node` is red and both of its children are black 2-nodes. When the
/// right sibling is a 3-node its red link is moved across; otherwise the three
/// nodes merge into a 4-node.
#[must_use]
pub fn move_red_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    flip_colors(&mut node);
    if has_red_left_child(node.right()) {
        node.right = node.right.take().map(rotate_right);
        node = rotate_left(node);
        flip_colors(&mut node);
    }
    node
}

/// Makes `node.right` or one of its children red by borrowing from the left.
///
/// Mirror image of [`move_red_left`] for the right-hand descent.
#[must_use]
pub fn move_red_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    flip_colors(&mut node);
    if has_red_left_child(node.left()) {
        node = rotate_right(node);
        flip_colors(&mut node);
    }
    node
}

/// Returns the leftmost node of the subtree rooted at `node`.
pub fn minimum<K>(node: &Node<K>) -> &Node<K> {
    let mut current = node;
    while let Some(left) = current.left() {
        current = left;
    }
    current
}
