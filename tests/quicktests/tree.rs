use quickcheck_macros::quickcheck;
use random_bst::tree::Tree;

use crate::Keys;

/// Checks every node's key against the bounds its ancestors put on it: left
/// descendants must be strictly less, right descendants greater or equal.
fn is_sort_tree(tree: &Tree, lower: Option<f64>, upper: Option<f64>) -> bool {
    match tree.root() {
        None => true,
        Some(n) => {
            let x = n.value();
            lower.map_or(true, |lo| x >= lo)
                && upper.map_or(true, |hi| x < hi)
                && is_sort_tree(n.left(), lower, Some(x))
                && is_sort_tree(n.right(), Some(x), upper)
        }
    }
}

#[quickcheck]
fn sort_tree_property(keys: Keys) -> bool {
    let tree: Tree = keys.0.into_iter().collect();
    is_sort_tree(&tree, None, None)
}

#[quickcheck]
fn in_order_values_are_sorted(keys: Keys) -> bool {
    let tree: Tree = keys.0.iter().copied().collect();
    let mut expected = keys.0;
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

    tree.values() == expected
}

#[quickcheck]
fn one_node_per_insert(keys: Keys) -> bool {
    let mut tree = Tree::new();
    keys.0.iter().enumerate().all(|(i, x)| {
        tree.insert(*x);
        tree.node_count() == i + 1
    })
}

#[quickcheck]
fn duplicates_are_kept(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|x| f64::from(*x)).collect();
    tree.node_count() == xs.len()
}
