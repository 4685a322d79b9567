//! Structural metrics. All of them are plain recursive traversals.

use super::node::{Color, Node};

/// Number of edges on the longest root-to-leaf path; `-1` for an empty tree.
pub fn total_height<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(-1, |node| {
        1 + total_height(node.left()).max(total_height(node.right()))
    })
}

/// Largest number of black nodes on any root-to-leaf path.
///
/// This takes the maximum over both subtrees and does not check that all
/// paths agree; see [`validate`](super::validation::validate) for that.
pub fn black_height<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, |node| {
        black_height(node.left()).max(black_height(node.right())) + black_weight(node)
    })
}

/// Number of black nodes in the whole tree.
pub fn black_node_count<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, |node| {
        black_weight(node) + black_node_count(node.left()) + black_node_count(node.right())
    })
}

/// Number of nodes in the whole tree.
pub fn node_count<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, |node| 1 + node_count(node.left()) + node_count(node.right()))
}

const fn black_weight<K>(node: &Node<K>) -> usize {
    match node.color {
        Color::Black => 1,
        Color::Red => 0,
    }
}
