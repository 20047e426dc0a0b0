//! Lazy traversals over a [`Tree`](crate::Tree).
//!
//! Each order keeps its own explicit frontier instead of recursing, so walking
//! a degenerate tree costs heap, not call stack.

use std::collections::VecDeque;

use crate::node::Node;

/// The order in which [`Traverse`] visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first, top to bottom, left to right within a level.
    Level,
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    Inorder,
    /// Node, left subtree, right subtree.
    Preorder,
    /// Left subtree, right subtree, node.
    Postorder,
}

/// Yet-to-be-visited nodes for each order.
enum Frontier<'a, K> {
    Level(VecDeque<&'a Node<K>>),
    Pre(Vec<&'a Node<K>>),
    /// The stack holds nodes whose left subtree is being (or has been) walked.
    In(Vec<&'a Node<K>>),
    /// `true` once a node's children have been pushed above it.
    Post(Vec<(&'a Node<K>, bool)>),
}

/// An iterator over the keys of a tree in a given [`Order`]. Created by
/// [`Tree::iter`](crate::Tree::iter).
pub struct Traverse<'a, K> {
    frontier: Frontier<'a, K>,
}

impl<'a, K> Traverse<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, order: Order) -> Self {
        let frontier = match order {
            Order::Level => Frontier::Level(root.into_iter().collect()),
            Order::Preorder => Frontier::Pre(root.into_iter().collect()),
            Order::Inorder => {
                let mut stack = Vec::new();
                push_left_spine(&mut stack, root);
                Frontier::In(stack)
            }
            Order::Postorder => Frontier::Post(root.into_iter().map(|n| (n, false)).collect()),
        };
        Self { frontier }
    }
}

fn push_left_spine<'a, K>(stack: &mut Vec<&'a Node<K>>, mut node: Option<&'a Node<K>>) {
    while let Some(n) = node {
        stack.push(n);
        node = n.left();
    }
}

impl<'a, K> Iterator for Traverse<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.frontier {
            Frontier::Level(queue) => {
                let node = queue.pop_front()?;
                queue.extend(node.left());
                queue.extend(node.right());
                Some(node.key())
            }
            Frontier::Pre(stack) => {
                let node = stack.pop()?;
                // Right goes in first so left comes out first.
                stack.extend(node.right());
                stack.extend(node.left());
                Some(node.key())
            }
            Frontier::In(stack) => {
                let node = stack.pop()?;
                push_left_spine(stack, node.right());
                Some(node.key())
            }
            Frontier::Post(stack) => loop {
                let (node, expanded) = stack.pop()?;
                if expanded {
                    return Some(node.key());
                }
                stack.push((node, true));
                stack.extend(node.right().map(|n| (n, false)));
                stack.extend(node.left().map(|n| (n, false)));
            },
        }
    }
}
