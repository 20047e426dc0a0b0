//! Property tests over the public API of `bst_engine`.

mod tree;
