//! Node model.

/// The color of the link from a node's parent to the node.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Color {
    /// Glues the node to its parent as part of a 3-node or 4-node.
    Red,
    /// An ordinary 2-3-4 tree edge.
    Black,
}

impl Color {
    /// Returns the opposite color.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }
}

/// An owning reference to a subtree. `None` is an absent child and counts as black.
pub type Link<K> = Option<Box<Node<K>>>;

/// A node of the tree.
///
/// Each node exclusively owns its two children; there are no parent or shared
/// references.
#[derive(Clone, Debug)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) color: Color,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    /// Creates a new red node with no children.
    ///
    /// Every node enters the tree red: a 2-node growing into a 3-node.
    #[must_use]
    pub const fn new_red(key: K) -> Self {
        Self {
            key,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    /// Creates a node with explicit color and children.
    ///
    /// Nothing is checked; this exists so that callers can build transient
    /// shapes and feed them to the rebalancing primitives.
    #[must_use]
    pub const fn with_children(key: K, color: Color, left: Link<K>, right: Link<K>) -> Self {
        Self {
            key,
            color,
            left,
            right,
        }
    }

    /// Returns the key stored in this node.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the node's color.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the left child, if any.
    #[inline]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child, if any.
    #[inline]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Checks if this node is red.
    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    /// Checks if this node is black.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }
}

/// Checks if an optional node is red. An absent node is black.
#[inline]
pub(crate) fn is_red<K>(node: Option<&Node<K>>) -> bool {
    node.is_some_and(Node::is_red)
}

/// Checks if an optional node exists and has a red left child.
#[inline]
pub(crate) fn has_red_left_child<K>(node: Option<&Node<K>>) -> bool {
    node.is_some_and(|node| is_red(node.left()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_red_has_no_children() {
        let node = Node::new_red(7);
        assert_eq!(*node.key(), 7);
        assert_eq!(node.color(), Color::Red);
        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }

    #[rstest]
    fn test_absent_node_is_black() {
        assert!(!is_red::<i32>(None));
        assert!(!has_red_left_child::<i32>(None));
    }

    #[rstest]
    #[case(Color::Red, true)]
    #[case(Color::Black, false)]
    fn test_is_red_follows_color(#[case] color: Color, #[case] expected: bool) {
        let node = Node::with_children(1, color, None, None);
        assert_eq!(is_red(Some(&node)), expected);
    }

    #[rstest]
    fn test_has_red_left_child() {
        let node = Node::with_children(
            2,
            Color::Black,
            Some(Box::new(Node::new_red(1))),
            None,
        );
        assert!(has_red_left_child(Some(&node)));
    }

    #[rstest]
    fn test_flipped_is_an_involution() {
        assert_eq!(Color::Red.flipped(), Color::Black);
        assert_eq!(Color::Black.flipped().flipped(), Color::Black);
    }
}
