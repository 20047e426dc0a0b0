use bst_engine::{Order, Tree};

use std::collections::BTreeSet;

/// The keys of a tree in the given order.
fn keys(tree: &Tree<i8>, order: Order) -> Vec<i8> {
    tree.iter(order).copied().collect()
}

/// The ascending, duplicate free version of `xs`.
fn ascending_unique(xs: &[i8]) -> Vec<i8> {
    xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Walks the whole tree checking that every left descendant is smaller and
/// every right descendant is larger than its ancestor.
fn holds_invariant(tree: &Tree<i8>) -> bool {
    fn check(node: Option<&bst_engine::Node<i8>>, lo: Option<i8>, hi: Option<i8>) -> bool {
        match node {
            None => true,
            Some(n) => {
                lo.map_or(true, |lo| *n.key() > lo)
                    && hi.map_or(true, |hi| *n.key() < hi)
                    && check(n.left(), lo, Some(*n.key()))
                    && check(n.right(), Some(*n.key()), hi)
            }
        }
    }
    check(tree.root(), None, None)
}

quickcheck::quickcheck! {
    fn construct_round_trips(xs: Vec<i8>) -> bool {
        let tree = Tree::from_keys(xs.clone());
        keys(&tree, Order::Inorder) == ascending_unique(&xs) && holds_invariant(&tree)
    }
}

quickcheck::quickcheck! {
    fn construct_is_balanced(xs: Vec<i8>) -> bool {
        Tree::from_keys(xs).is_balanced()
    }
}

quickcheck::quickcheck! {
    fn every_order_visits_every_key(xs: Vec<i8>) -> bool {
        let tree = Tree::from_keys(xs.clone());
        let expected = ascending_unique(&xs);

        [Order::Level, Order::Preorder, Order::Postorder].iter().all(|order| {
            let mut visited = keys(&tree, *order);
            visited.sort_unstable();
            visited == expected
        })
    }
}

quickcheck::quickcheck! {
    fn insert_twice_is_idempotent(xs: Vec<i8>, k: i8) -> bool {
        let mut tree = Tree::from_keys(xs);
        tree.insert(k);
        let len = tree.len();
        let shape = keys(&tree, Order::Preorder);

        !tree.insert(k) && tree.len() == len && keys(&tree, Order::Preorder) == shape
    }
}

quickcheck::quickcheck! {
    fn insert_then_delete_restores(xs: Vec<i8>, k: i8) -> bool {
        let mut tree = Tree::from_keys(xs);
        if tree.contains(&k) {
            return true;
        }
        let before = keys(&tree, Order::Inorder);

        tree.insert(k) && tree.delete(&k) && keys(&tree, Order::Inorder) == before
    }
}

quickcheck::quickcheck! {
    fn deletes_keep_the_invariant(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::from_keys(xs.clone());
        let mut model: BTreeSet<_> = xs.into_iter().collect();

        for delete in &deletes {
            if tree.delete(delete) != model.remove(delete) || !holds_invariant(&tree) {
                return false;
            }
        }

        tree.len() == model.len() && tree.iter(Order::Inorder).eq(model.iter())
    }
}

quickcheck::quickcheck! {
    fn rebalance_keeps_keys(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        tree.extend(xs);
        let before = keys(&tree, Order::Inorder);

        tree.rebalance();
        tree.is_balanced() && holds_invariant(&tree) && keys(&tree, Order::Inorder) == before
    }
}

#[test]
fn ascending_inserts_then_rebalance() {
    let mut tree = Tree::new();
    for key in 1..=50 {
        tree.insert(key);
    }
    assert!(!tree.is_balanced());

    let before = keys(&tree, Order::Inorder);
    tree.rebalance();

    assert!(tree.is_balanced());
    assert_eq!(keys(&tree, Order::Inorder), before);
}

#[test]
fn lookup_misses_and_hits() {
    let tree = Tree::from_keys(vec![4, 4, 7, 14, 25, 1, 6, 1, 20, 25, 22]);

    assert!(tree.lookup(&14).is_some());
    assert!(tree.lookup(&15).is_none());
    assert_eq!(tree.root().map(|n| *n.key()), Some(7));
}
