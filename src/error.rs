use thiserror::Error;

/// Failures reported by the fallible [`Tree`](crate::Tree) queries and by the
/// [builder](crate::build).
///
/// `insert` and `delete` never produce these; a duplicate insert or a delete of
/// a missing key is reported through their `bool` return instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// No node in the tree holds the requested key.
    #[error("key not found in tree")]
    NotFound,
    /// The requested key is held by the root, which has no parent.
    #[error("the root node has no parent")]
    AbsentParent,
    /// The builder was asked for a span it has no keys for. This only happens
    /// when an iterator misreports its length.
    #[error("invalid build bounds {lo}..{hi} for {len} keys")]
    InvalidBounds {
        /// Inclusive start of the span being built.
        lo: usize,
        /// Exclusive end of the span being built.
        hi: usize,
        /// Number of keys the builder was told it would receive.
        len: usize,
    },
}
