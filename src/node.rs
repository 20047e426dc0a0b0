/// An owned, possibly empty, subtree.
pub type Link<K> = Option<Box<Node<K>>>;

/// A single key in a [`Tree`](crate::Tree). A `Node` exclusively owns its
/// children and holds no pointer back to its parent.
#[derive(Debug)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any. Every key in it is smaller than
    /// [`Node::key`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any. Every key in it is larger than
    /// [`Node::key`].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The node holding the smallest key in the subtree rooted here.
    pub fn min(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// The node holding the largest key in the subtree rooted here.
    pub fn max(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    /// Number of edges on the longest path from this node down to a leaf. A
    /// leaf has height 0.
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, |n| n.height() + 1);
        let right = self.right().map_or(0, |n| n.height() + 1);
        left.max(right)
    }

    /// Number of nodes in the subtree rooted here.
    #[cfg(test)]
    pub(crate) fn count(&self) -> usize {
        1 + self.left().map_or(0, Self::count) + self.right().map_or(0, Self::count)
    }
}
