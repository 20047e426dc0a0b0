//! The tree engine: bulk construction, point mutation, queries, traversal
//! and on-demand rebalancing.
//!
//! # Examples
//!
//! ```
//! use bst_engine::{Order, Tree};
//!
//! let mut tree = Tree::from_keys(vec![4, 4, 7, 14, 25, 1, 6, 1, 20, 25, 22]);
//! assert_eq!(tree.root().map(|n| *n.key()), Some(7));
//!
//! // Inserting a key that's already present changes nothing.
//! assert!(tree.insert(30));
//! assert!(!tree.insert(30));
//!
//! assert!(tree.delete(&14));
//! assert!(!tree.delete(&14));
//!
//! let keys: Vec<_> = tree.traverse(Order::Inorder).into_iter().copied().collect();
//! assert_eq!(keys, vec![1, 4, 6, 7, 20, 22, 25, 30]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::build::build;
use crate::node::{Link, Node};
use crate::sort::sort_dedup;
use crate::traverse::{Order, Traverse};
use crate::Error;

/// A Binary Search Tree of unique keys. It is built balanced but does not
/// balance itself: inserts and deletes leave the shape wherever they leave it
/// until [`Tree::rebalance`] is called.
///
/// `Tree` is single-owner and not synchronized; wrap it in a lock to share it
/// between threads.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Unlink children before each node drops so a long chain doesn't recurse.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a minimum-height tree from `keys`, which may be in any order and
    /// may repeat. Duplicates are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let tree = Tree::from_keys(vec![3, 1, 2, 3, 1]);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(2));
    /// assert!(tree.is_balanced());
    /// ```
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let sorted = sort_dedup(keys.into_iter().collect());
        let len = sorted.len();
        let root = build(sorted).expect("A Vec always yields exactly its length");
        trace!(len, "constructed tree");

        Self { root, len }
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// How many keys are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Finds the node holding `key`, if any. Takes `O(depth)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let tree = Tree::from_keys(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.lookup(&3).map(|n| *n.key()), Some(3));
    /// assert!(tree.lookup(&42).is_none());
    /// ```
    pub fn lookup(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.lookup(key).is_some()
    }

    /// Finds the node whose child holds `key`.
    ///
    /// # Errors
    ///
    /// [`Error::AbsentParent`] if `key` is the root's key and
    /// [`Error::NotFound`] if `key` isn't in the tree.
    pub fn parent_of(&self, key: &K) -> Result<&Node<K>, Error>
    where
        K: Ord,
    {
        let mut parent = None;
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return parent.ok_or(Error::AbsentParent),
                Ordering::Greater => node.right(),
            };
            parent = Some(node);
        }
        Err(Error::NotFound)
    }

    /// The node holding the smallest key, or `None` if the tree is empty. Use
    /// [`Node::min`] for a subtree.
    pub fn min(&self) -> Option<&Node<K>> {
        self.root().map(Node::min)
    }

    /// The node holding the largest key, or `None` if the tree is empty. Use
    /// [`Node::max`] for a subtree.
    pub fn max(&self) -> Option<&Node<K>> {
        self.root().map(Node::max)
    }

    /// Number of edges from the root down to the node holding `key`. The root
    /// has depth 0.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `key` isn't in the tree.
    pub fn depth(&self, key: &K) -> Result<usize, Error>
    where
        K: Ord,
    {
        let mut depth = 0;
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Ok(depth),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        Err(Error::NotFound)
    }

    /// Number of edges on the longest path from the node holding `key` down to
    /// a leaf. A leaf has height 0 (and an empty subtree, were it addressable,
    /// would have height -1).
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `key` isn't in the tree.
    pub fn height(&self, key: &K) -> Result<usize, Error>
    where
        K: Ord,
    {
        self.lookup(key).map(Node::height).ok_or(Error::NotFound)
    }

    /// Inserts `key` as a new leaf. Returns `false`, leaving the tree
    /// untouched, if the key was already present.
    ///
    /// No rebalancing happens here.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    trace!(inserted = false, len = self.len, "insert");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Node::new_boxed(key));
        self.len += 1;

        trace!(inserted = true, len = self.len, "insert");
        true
    }

    /// Deletes the node holding `key`. Returns `false` if there was no such
    /// node, which leaves the tree untouched.
    ///
    /// A node with two children takes its inorder successor's key and the
    /// successor's node is removed from the right subtree instead. No
    /// rebalancing happens here.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let mut tree = Tree::from_keys(vec![1, 2, 3]);
    ///
    /// assert!(tree.delete(&2));
    /// assert!(!tree.delete(&2));
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let (root, deleted) = delete_from(self.root.take(), key);
        self.root = root;
        if deleted {
            self.len -= 1;
        }

        trace!(deleted, len = self.len, "delete");
        deleted
    }

    /// Lazily walks the keys in the given order.
    pub fn iter(&self, order: Order) -> Traverse<'_, K> {
        Traverse::new(self.root(), order)
    }

    /// Collects the keys in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{Order, Tree};
    ///
    /// let tree = Tree::from_keys(vec![3, 2, 1]);
    ///
    /// assert_eq!(tree.traverse(Order::Level), vec![&2, &1, &3]);
    /// assert_eq!(tree.traverse(Order::Postorder), vec![&1, &3, &2]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<&K> {
        self.iter(order).collect()
    }

    /// Calls `visit` on every key in the given order.
    pub fn traverse_with<F>(&self, order: Order, mut visit: F)
    where
        F: FnMut(&K),
    {
        for key in self.iter(order) {
            visit(key);
        }
    }

    /// Whether, at every node, the heights of the two subtrees differ by at
    /// most one. Runs in a single `O(n)` pass.
    pub fn is_balanced(&self) -> bool {
        balanced_height(self.root()).is_some()
    }

    /// Rebuilds the tree into minimum-height shape, keeping the same keys.
    /// Takes `O(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 1..=50 {
    ///     tree.insert(key);
    /// }
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.len(), 50);
    /// ```
    pub fn rebalance(&mut self) {
        let keys = drain_inorder(self.root.take());
        debug_assert_eq!(keys.len(), self.len);

        self.root = build(keys).expect("A Vec always yields exactly its length");
        debug!(len = self.len, "rebalanced tree");

        if cfg!(debug_assertions) {
            assert!(self.is_balanced());
        }
    }
}

/// Removes `key` from the subtree rooted at `link`, returning the new subtree
/// root and whether anything was removed.
fn delete_from<K>(link: Link<K>, key: &K) -> (Link<K>, bool)
where
    K: Ord,
{
    let mut node = match link {
        Some(node) => node,
        None => return (None, false),
    };

    match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, deleted) = delete_from(node.left.take(), key);
            node.left = left;
            (Some(node), deleted)
        }
        Ordering::Equal => (unlink(node), true),
        Ordering::Greater => {
            let (right, deleted) = delete_from(node.right.take(), key);
            node.right = right;
            (Some(node), deleted)
        }
    }
}

/// Returns what should replace `node` once it's removed.
fn unlink<K>(mut node: Box<Node<K>>) -> Link<K> {
    match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            let (successor, right) = take_min(right);
            node.key = successor;
            node.left = Some(left);
            node.right = right;
            Some(node)
        }
    }
}

/// Removes the smallest node of a subtree, returning its key and what's left
/// of the subtree. The removed node never has a left child so this always
/// ends in the leaf or single child case.
fn take_min<K>(mut node: Box<Node<K>>) -> (K, Link<K>) {
    match node.left.take() {
        Some(left) => {
            let (min, rest) = take_min(left);
            node.left = rest;
            (min, Some(node))
        }
        None => {
            let Node { key, right, .. } = *node;
            (key, right)
        }
    }
}

/// Height of the subtree if it's balanced, with -1 for an empty subtree.
/// `None` as soon as any node is found out of balance.
fn balanced_height<K>(node: Option<&Node<K>>) -> Option<isize> {
    let node = match node {
        Some(node) => node,
        None => return Some(-1),
    };
    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;

    if (left - right).abs() <= 1 {
        Some(left.max(right) + 1)
    } else {
        None
    }
}

/// Consumes a subtree, returning its keys in ascending order.
fn drain_inorder<K>(root: Link<K>) -> Vec<K> {
    let mut keys = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;

    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        match stack.pop() {
            Some(node) => {
                let Node { key, right, .. } = *node;
                keys.push(key);
                current = right;
            }
            None => return keys,
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Traverse<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter(Order::Inorder)
    }
}
