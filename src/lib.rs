//! A Binary Search Tree engine over unique, totally ordered keys.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are defined recursively using
//! the notion of a [`Node`]. A `Node` stores a key and may have a left and a
//! right child `Node`. The invariant of a BST is:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! No two `Node`s of a [`Tree`] hold equal keys.
//!
//! Searching takes `O(height)`. This crate builds trees of minimum height,
//! `floor(lg N)` for `N` keys, but does _not_ keep them that way: inserts and
//! deletes are plain BST edits, and [`Tree::rebalance`] restores the minimum
//! height on request.
//!
//! ## Building
//!
//! [`Tree::from_keys`] accepts keys in any order, with repeats. They are
//! merge sorted with duplicates dropped ([`sort::sort_dedup`]) and the sorted
//! keys are then split around their floor-midpoint recursively
//! ([`build::build`]).
//!
//! ## Features
//!
//! - `pretty` (default): [`Tree::pretty`] and a [`Display`](std::fmt::Display)
//!   impl drawing the tree sideways.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod build;
mod error;
mod node;
#[cfg(feature = "pretty")]
pub mod pretty;
pub mod sort;
#[cfg(test)]
mod test;
mod traverse;
mod tree;

pub use error::Error;
pub use node::{Link, Node};
pub use traverse::{Order, Traverse};
pub use tree::Tree;
