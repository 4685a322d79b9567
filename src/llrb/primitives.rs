//! Local rebalancing primitives.
//!
//! Each primitive restructures a constant number of nodes and returns the new
//! subtree root, which the caller must store in place of the old one.

use super::node::{Color, Node, has_red_left_child, is_red};

/// Rotates the subtree to the left around `node`.
///
/// The right child is promoted and takes over `node`'s color, while `node`
/// becomes its red left child. Returns `node` unchanged when it has no right
/// child.
#[must_use]
pub fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut promoted) = node.right.take() else {
        return node;
    };
    node.right = promoted.left.take();
    promoted.color = node.color;
    node.color = Color::Red;
    promoted.left = Some(node);
    promoted
}

/// Rotates the subtree to the right around `node`.
///
/// Mirror image of [`rotate_left`]. Returns `node` unchanged when it has no
/// left child.
#[must_use]
pub fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut promoted) = node.left.take() else {
        return node;
    };
    node.left = promoted.right.take();
    promoted.color = node.color;
    node.color = Color::Red;
    promoted.right = Some(node);
    promoted
}

/// Inverts the color of `node` and of each child that is present.
///
/// Splits a 4-node when `node` is black with two red children, and merges
/// `node` with its children into a 4-node when it is red with two black ones.
pub fn flip_colors<K>(node: &mut Node<K>) {
    node.color = node.color.flipped();
    if let Some(left) = node.left.as_deref_mut() {
        left.color = left.color.flipped();
    }
    if let Some(right) = node.right.as_deref_mut() {
        right.color = right.color.flipped();
    }
}

/// Splits a 4-node by passing its red link up to the parent.
///
/// Unlike [`flip_colors`] the result does not depend on the current colors:
/// `node` ends up red and its children black.
pub fn split_four_node<K>(node: &mut Node<K>) {
    node.color = Color::Red;
    if let Some(left) = node.left.as_deref_mut() {
        left.color = Color::Black;
    }
    if let Some(right) = node.right.as_deref_mut() {
        right.color = Color::Black;
    }
}

/// Restores the left-leaning shape of a subtree whose children are valid.
///
/// The three rules run in sequence since each may set up the next one:
///
/// 1. a red right link under a black left link is rotated left
/// 2. two red left links in a row are rotated right
/// 3. two red children are split with a color flip
///
/// On a subtree that already satisfies the rules nothing fires.
#[must_use]
pub fn balance<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    if is_red(node.right()) && !is_red(node.left()) {
        node = rotate_left(node);
    }
    if is_red(node.left()) && has_red_left_child(node.left()) {
        node = rotate_right(node);
    }
    if is_red(node.left()) && is_red(node.right()) {
        flip_colors(&mut node);
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn leaf(key: i32, color: Color) -> Option<Box<Node<i32>>> {
        Some(Box::new(Node::with_children(key, color, None, None)))
    }

    fn branch(
        key: i32,
        color: Color,
        left: Option<Box<Node<i32>>>,
        right: Option<Box<Node<i32>>>,
    ) -> Box<Node<i32>> {
        Box::new(Node::with_children(key, color, left, right))
    }

    #[rstest]
    fn test_rotate_left_promotes_right_child() {
        let node = branch(
            2,
            Color::Black,
            leaf(1, Color::Black),
            Some(branch(4, Color::Red, leaf(3, Color::Black), leaf(5, Color::Black))),
        );

        let rotated = rotate_left(node);

        assert_eq!(rotated.key, 4);
        assert_eq!(rotated.color, Color::Black);
        let demoted = rotated.left().unwrap();
        assert_eq!(demoted.key, 2);
        assert_eq!(demoted.color, Color::Red);
        assert_eq!(demoted.left().unwrap().key, 1);
        assert_eq!(demoted.right().unwrap().key, 3);
        assert_eq!(rotated.right().unwrap().key, 5);
    }

    #[rstest]
    fn test_rotate_right_promotes_left_child() {
        let node = branch(
            4,
            Color::Black,
            Some(branch(2, Color::Red, leaf(1, Color::Black), leaf(3, Color::Black))),
            leaf(5, Color::Black),
        );

        let rotated = rotate_right(node);

        assert_eq!(rotated.key, 2);
        assert_eq!(rotated.color, Color::Black);
        assert_eq!(rotated.left().unwrap().key, 1);
        let demoted = rotated.right().unwrap();
        assert_eq!(demoted.key, 4);
        assert_eq!(demoted.color, Color::Red);
        assert_eq!(demoted.left().unwrap().key, 3);
        assert_eq!(demoted.right().unwrap().key, 5);
    }

    #[rstest]
    fn test_rotations_without_child_return_node_unchanged() {
        let node = branch(1, Color::Black, None, None);
        let node = rotate_left(node);
        let node = rotate_right(node);
        assert_eq!(node.key, 1);
        assert_eq!(node.color, Color::Black);
    }

    #[rstest]
    fn test_flip_colors_inverts_present_nodes() {
        let mut node = branch(2, Color::Black, leaf(1, Color::Red), None);
        flip_colors(&mut node);
        assert_eq!(node.color, Color::Red);
        assert_eq!(node.left().unwrap().color, Color::Black);
        assert!(node.right().is_none());
    }

    #[rstest]
    #[case(Color::Black, Color::Red)]
    #[case(Color::Red, Color::Black)]
    fn test_split_four_node_ignores_current_colors(
        #[case] parent: Color,
        #[case] children: Color,
    ) {
        let mut node = branch(2, parent, leaf(1, children), leaf(3, children));
        split_four_node(&mut node);
        assert_eq!(node.color, Color::Red);
        assert_eq!(node.left().unwrap().color, Color::Black);
        assert_eq!(node.right().unwrap().color, Color::Black);
    }

    #[rstest]
    fn test_balance_leans_right_red_link_left() {
        let node = branch(1, Color::Black, None, leaf(2, Color::Red));
        let balanced = balance(node);
        assert_eq!(balanced.key, 2);
        assert_eq!(balanced.color, Color::Black);
        assert_eq!(balanced.left().unwrap().key, 1);
        assert!(balanced.left().unwrap().is_red());
    }

    #[rstest]
    fn test_balance_splits_two_left_reds() {
        let node = branch(
            3,
            Color::Black,
            Some(branch(2, Color::Red, leaf(1, Color::Red), None)),
            None,
        );
        let balanced = balance(node);
        assert_eq!(balanced.key, 2);
        assert_eq!(balanced.color, Color::Red);
        assert_eq!(balanced.left().unwrap().color, Color::Black);
        assert_eq!(balanced.right().unwrap().color, Color::Black);
    }

    #[rstest]
    fn test_balance_on_balanced_subtree_is_noop() {
        let node = branch(2, Color::Black, leaf(1, Color::Red), None);
        let balanced = balance(node);
        assert_eq!(balanced.key, 2);
        assert_eq!(balanced.color, Color::Black);
        assert!(balanced.left().unwrap().is_red());
    }

    fn describe(node: Option<&Node<i32>>) -> String {
        node.map_or_else(String::new, |node| {
            format!(
                "({}{}{:?}{})",
                describe(node.left()),
                node.key,
                node.color,
                describe(node.right())
            )
        })
    }

    #[rstest]
    #[case::right_leaning(branch(1, Color::Black, None, leaf(2, Color::Red)))]
    #[case::two_left_reds(branch(
        3,
        Color::Black,
        Some(branch(2, Color::Red, leaf(1, Color::Red), None)),
        None,
    ))]
    #[case::four_node(branch(2, Color::Black, leaf(1, Color::Red), leaf(3, Color::Red)))]
    #[case::right_red_under_four_node(branch(
        2,
        Color::Black,
        leaf(1, Color::Black),
        Some(branch(4, Color::Red, leaf(3, Color::Black), leaf(5, Color::Black))),
    ))]
    fn test_balance_twice_equals_once(#[case] node: Box<Node<i32>>) {
        let once = balance(node);
        let once_shape = describe(Some(&*once));
        let twice = balance(once);
        assert_eq!(describe(Some(&*twice)), once_shape);
    }
}
