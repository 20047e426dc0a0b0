//! Sorting with duplicate removal, used to turn arbitrary input into something
//! the [builder](crate::build) can consume.

use std::cmp::Ordering;

/// Sorts `keys` into strictly ascending order, dropping duplicates.
///
/// This is a top-down merge sort. Each half is sorted and deduplicated
/// recursively, so the merge only has to drop keys equal to the last key it
/// placed, which also catches duplicates straddling the two halves. Runs in
/// `O(n log n)`.
///
/// # Examples
///
/// ```
/// use bst_engine::sort::sort_dedup;
///
/// assert_eq!(sort_dedup(vec![4, 1, 4, 3, 1]), vec![1, 3, 4]);
/// assert_eq!(sort_dedup(vec![7, 7, 7]), vec![7]);
/// assert!(sort_dedup(Vec::<i32>::new()).is_empty());
/// ```
pub fn sort_dedup<K>(mut keys: Vec<K>) -> Vec<K>
where
    K: Ord,
{
    if keys.len() <= 1 {
        return keys;
    }

    // The left half is the shorter one when the length is odd.
    let right = keys.split_off(keys.len() / 2);
    merge(sort_dedup(keys), sort_dedup(right))
}

/// Merges two strictly ascending runs into one, keeping a single copy of any
/// key present in both.
fn merge<K>(left: Vec<K>, right: Vec<K>) -> Vec<K>
where
    K: Ord,
{
    let mut merged: Vec<K> = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let next = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => match l.cmp(r) {
                Ordering::Less => left.next(),
                Ordering::Greater => right.next(),
                Ordering::Equal => {
                    right.next();
                    left.next()
                }
            },
            (Some(_), None) => left.next(),
            (None, Some(_)) => right.next(),
            (None, None) => break,
        };

        if let Some(key) = next {
            if merged.last() != Some(&key) {
                merged.push(key);
            }
        }
    }

    merged
}
