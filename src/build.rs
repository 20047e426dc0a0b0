//! Builds a minimum-height tree out of keys that are already sorted and free
//! of duplicates.
//!
//! The root of every subtree is the key at the floor-midpoint of its span of
//! indices. With `lo..hi` a half-open span, that is `lo + (hi - lo - 1) / 2`,
//! the same index as `(lo + last) / 2` for the inclusive form. Both
//! [`Tree::from_keys`](crate::Tree::from_keys) and
//! [`Tree::rebalance`](crate::Tree::rebalance) go through here, so the two
//! always agree on shape.
//!
//! Keys are consumed in ascending order while the subtree is built left
//! first, so the key pulled for each node is exactly the one at its midpoint
//! index. No key is cloned.

use crate::node::{Link, Node};
use crate::Error;

/// Builds a height-balanced subtree from `sorted`, which must be strictly
/// ascending. The resulting height is `floor(log2(n))` for `n` keys.
///
/// Fails with [`Error::InvalidBounds`] if the iterator yields fewer or more
/// keys than its [`ExactSizeIterator::len`] promised.
///
/// # Examples
///
/// ```
/// use bst_engine::build::build;
///
/// let root = build(vec![1, 4, 6, 7, 14, 20, 22, 25]).unwrap().unwrap();
///
/// // Floor-midpoint of indices 0..=7 is index 3.
/// assert_eq!(root.key(), &7);
/// assert_eq!(root.height(), 3);
/// ```
pub fn build<I>(sorted: I) -> Result<Link<I::Item>, Error>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    let mut keys = sorted.into_iter();
    let len = keys.len();
    let root = build_span(&mut keys, 0, len, len)?;

    match keys.next() {
        None => Ok(root),
        Some(_) => Err(Error::InvalidBounds {
            lo: len,
            hi: len + 1 + keys.count(),
            len,
        }),
    }
}

/// Builds the subtree over indices `lo..hi`, pulling keys from `keys` in order.
fn build_span<K, I>(keys: &mut I, lo: usize, hi: usize, len: usize) -> Result<Link<K>, Error>
where
    I: Iterator<Item = K>,
{
    if lo >= hi {
        return Ok(None);
    }

    let mid = lo + (hi - lo - 1) / 2;
    let left = build_span(keys, lo, mid, len)?;
    let key = keys.next().ok_or(Error::InvalidBounds { lo, hi, len })?;
    let right = build_span(keys, mid + 1, hi, len)?;

    let mut node = Node::new_boxed(key);
    node.left = left;
    node.right = right;
    Ok(Some(node))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reports a length that does not match what it yields.
    struct Liar {
        claimed: usize,
        inner: std::vec::IntoIter<i32>,
    }

    impl Iterator for Liar {
        type Item = i32;

        fn next(&mut self) -> Option<i32> {
            self.inner.next()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.claimed, Some(self.claimed))
        }
    }

    impl ExactSizeIterator for Liar {}

    fn preorder(link: &Link<i32>, out: &mut Vec<i32>) {
        if let Some(node) = link {
            out.push(node.key);
            preorder(&node.left, out);
            preorder(&node.right, out);
        }
    }

    #[test]
    fn empty_input_builds_nothing() {
        assert!(build(Vec::<i32>::new()).unwrap().is_none());
    }

    #[test]
    fn floor_midpoint_shape() {
        let root = build(vec![1, 2, 3, 4]).unwrap();
        let mut keys = Vec::new();
        preorder(&root, &mut keys);

        // Indices 0..=3 pick 1 (value 2), then 0..=0 and 2..=3 (value 3).
        assert_eq!(keys, vec![2, 1, 3, 4]);
    }

    #[test]
    fn minimum_height() {
        for n in 1..=64usize {
            let root = build((0..n as i32).collect::<Vec<_>>()).unwrap().unwrap();
            let expected = (usize::BITS - 1 - n.leading_zeros()) as usize;
            assert_eq!(root.height(), expected, "n = {}", n);
            assert_eq!(root.count(), n);
        }
    }

    #[test]
    fn short_iterator_is_invalid_bounds() {
        let liar = Liar {
            claimed: 4,
            inner: vec![1, 2, 3].into_iter(),
        };
        assert!(matches!(build(liar), Err(Error::InvalidBounds { len: 4, .. })));
    }

    #[test]
    fn long_iterator_is_invalid_bounds() {
        let liar = Liar {
            claimed: 2,
            inner: vec![1, 2, 3, 4].into_iter(),
        };
        assert_eq!(
            build(liar).unwrap_err(),
            Error::InvalidBounds { lo: 2, hi: 4, len: 2 }
        );
    }
}
