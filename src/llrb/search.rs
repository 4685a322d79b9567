//! Read-only lookups.
//!
//! Duplicates may sit on either side of an equal key once rotations have run,
//! so ordering inside a subtree is `left <= node <= right`.

use std::cmp::Ordering;

use super::node::Node;

/// Returns `true` if some node below `node` holds `key`.
pub fn contains<K: Ord>(node: Option<&Node<K>>, key: &K) -> bool {
    let mut current = node;
    while let Some(node) = current {
        match key.cmp(&node.key) {
            Ordering::Less => current = node.left(),
            Ordering::Equal => return true,
            Ordering::Greater => current = node.right(),
        }
    }
    false
}

/// Returns how many nodes below `node` hold `key`.
pub fn count<K: Ord>(node: Option<&Node<K>>, key: &K) -> usize {
    node.map_or(0, |node| match key.cmp(&node.key) {
        Ordering::Less => count(node.left(), key),
        Ordering::Greater => count(node.right(), key),
        Ordering::Equal => 1 + count(node.left(), key) + count(node.right(), key),
    })
}

/// Returns the rightmost node of the subtree, if any.
pub(crate) fn maximum<K>(node: Option<&Node<K>>) -> Option<&Node<K>> {
    let mut current = node?;
    while let Some(right) = current.right() {
        current = right;
    }
    Some(current)
}

/// Appends the keys below `node` to `keys` in ascending order.
pub(crate) fn collect_in_order<'a, K>(node: Option<&'a Node<K>>, keys: &mut Vec<&'a K>) {
    if let Some(node) = node {
        collect_in_order(node.left(), keys);
        keys.push(&node.key);
        collect_in_order(node.right(), keys);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llrb::insertion::insert;
    use crate::llrb::node::Link;
    use rstest::rstest;

    fn build(keys: &[i32]) -> Link<i32> {
        keys.iter().fold(None, |root, &key| insert(root, key))
    }

    #[rstest]
    #[case(2, true)]
    #[case(21, true)]
    #[case(4, false)]
    #[case(100, false)]
    fn test_contains(#[case] key: i32, #[case] expected: bool) {
        let root = build(&[29, 8, 20, 3, 9, 21, 2, 13]);
        assert_eq!(contains(root.as_deref(), &key), expected);
    }

    #[rstest]
    fn test_count_sees_duplicates_on_both_sides() {
        let root = build(&[5, 5, 5, 1, 9, 5]);
        assert_eq!(count(root.as_deref(), &5), 4);
        assert_eq!(count(root.as_deref(), &1), 1);
        assert_eq!(count(root.as_deref(), &2), 0);
    }

    #[rstest]
    fn test_maximum_and_in_order() {
        let root = build(&[4, 2, 6, 1, 3]);
        assert_eq!(maximum(root.as_deref()).map(|node| node.key), Some(6));
        let mut keys = Vec::new();
        collect_in_order(root.as_deref(), &mut keys);
        assert_eq!(keys, vec![&1, &2, &3, &4, &6]);
    }

    #[rstest]
    fn test_empty_lookups() {
        assert!(!contains::<i32>(None, &1));
        assert_eq!(count::<i32>(None, &1), 0);
        assert!(maximum::<i32>(None).is_none());
    }
}
