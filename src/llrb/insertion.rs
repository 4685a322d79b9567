//! Recursive insertion.

use super::node::{Color, Link, Node};
use super::primitives::balance;

/// Inserts `key` below `root` and returns the new root, which is always black.
///
/// Keys equal to an existing key are routed to the right, so duplicates
/// accumulate as distinct nodes.
///
/// # Complexity
///
/// O(log N)
#[must_use]
pub fn insert<K: Ord>(root: Link<K>, key: K) -> Link<K> {
    let mut root = insert_into_node(root, key);
    root.color = Color::Black;
    Some(root)
}

fn insert_into_node<K: Ord>(node: Link<K>, key: K) -> Box<Node<K>> {
    let Some(mut node) = node else {
        return Box::new(Node::new_red(key));
    };
    if key < node.key {
        node.left = Some(insert_into_node(node.left.take(), key));
    } else {
        node.right = Some(insert_into_node(node.right.take(), key));
    }
    balance(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn build(keys: &[i32]) -> Link<i32> {
        keys.iter().fold(None, |root, &key| insert(root, key))
    }

    #[rstest]
    fn test_insert_into_empty_creates_black_root() {
        let root = insert(None, 10).unwrap();
        assert_eq!(root.key, 10);
        assert_eq!(root.color, Color::Black);
        assert!(root.left.is_none() && root.right.is_none());
    }

    #[rstest]
    fn test_second_smaller_key_becomes_red_left_child() {
        let root = build(&[10, 5]).unwrap();
        assert_eq!(root.key, 10);
        let left = root.left().unwrap();
        assert_eq!(left.key, 5);
        assert!(left.is_red());
    }

    #[rstest]
    fn test_larger_key_is_rotated_to_lean_left() {
        let root = build(&[5, 10]).unwrap();
        assert_eq!(root.key, 10);
        assert_eq!(root.left().unwrap().key, 5);
        assert!(root.right().is_none());
    }

    #[rstest]
    fn test_three_ascending_keys_split_into_black_triangle() {
        let root = build(&[1, 2, 3]).unwrap();
        assert_eq!(root.key, 2);
        assert_eq!(root.color, Color::Black);
        assert_eq!(root.left().unwrap().color, Color::Black);
        assert_eq!(root.right().unwrap().color, Color::Black);
    }

    #[rstest]
    fn test_duplicate_keys_are_kept() {
        let root = build(&[5, 5, 5]).unwrap();
        assert_eq!(root.key, 5);
        assert_eq!(root.left().unwrap().key, 5);
        assert_eq!(root.right().unwrap().key, 5);
    }
}
