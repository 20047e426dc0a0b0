//! Sideways ASCII-art rendering of a tree, largest keys on top.
//!
//! ```text
//! │       ┌── 7
//! │   ┌── 6
//! │   │   └── 5
//! └── 4
//!     │   ┌── 3
//!     └── 2
//!         └── 1
//! ```

use std::fmt;

use crate::node::Node;
use crate::Tree;

/// Renders a [`Tree`] with box-drawing connectors. Created by
/// [`Tree::pretty`]; a tree's [`Display`](fmt::Display) impl uses it too.
pub struct Pretty<'a, K> {
    root: Option<&'a Node<K>>,
}

impl<K> Tree<K> {
    /// A displayable view of the tree's shape. An empty tree renders as
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::Tree;
    ///
    /// let tree = Tree::from_keys(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.pretty().to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
    /// ```
    pub fn pretty(&self) -> Pretty<'_, K> {
        Pretty { root: self.root() }
    }
}

impl<K> fmt::Display for Pretty<'_, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}

impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pretty(), f)
    }
}

/// Writes the right subtree, then `node`, then the left subtree. `is_left`
/// says which side of its parent `node` hangs from and so which way its
/// connector bends.
fn write_node<K>(f: &mut fmt::Formatter<'_>, node: &Node<K>, prefix: &str, is_left: bool) -> fmt::Result
where
    K: fmt::Display,
{
    if let Some(right) = node.right() {
        let extension = if is_left { "│   " } else { "    " };
        write_node(f, right, &format!("{}{}", prefix, extension), false)?;
    }

    let connector = if is_left { "└── " } else { "┌── " };
    writeln!(f, "{}{}{}", prefix, connector, node.key())?;

    if let Some(left) = node.left() {
        let extension = if is_left { "    " } else { "│   " };
        write_node(f, left, &format!("{}{}", prefix, extension), true)?;
    }

    Ok(())
}
