use quickcheck_macros::quickcheck;
use random_bst::stats::Stats;
use random_bst::tree::Tree;

use crate::Keys;

/// Counts the nodes that have at least one child.
fn internal_nodes(tree: &Tree) -> usize {
    match tree.root() {
        None => 0,
        Some(n) if n.is_leaf() => 0,
        Some(n) => 1 + internal_nodes(n.left()) + internal_nodes(n.right()),
    }
}

#[quickcheck]
fn non_empty_has_a_leaf(keys: Keys) -> bool {
    let tree: Tree = keys.0.iter().copied().collect();
    (tree.count_leaves() >= 1) == !keys.0.is_empty()
}

#[quickcheck]
fn leaves_and_internal_nodes_sum_to_size(keys: Keys) -> bool {
    let tree: Tree = keys.0.iter().copied().collect();
    tree.count_leaves() + internal_nodes(&tree) == keys.0.len()
}

#[quickcheck]
fn average_is_within_depth_bounds(keys: Keys) -> bool {
    let tree: Tree = keys.0.into_iter().collect();
    match Stats::of(&tree) {
        Err(_) => tree.is_empty(),
        Ok(stats) => {
            let average = stats.average_depth();
            average >= 0.0 && average <= stats.max_depth as f64
        }
    }
}

#[quickcheck]
fn traversals_are_repeatable(keys: Keys) -> bool {
    let tree: Tree = keys.0.into_iter().collect();
    let first = (
        tree.count_leaves(),
        tree.sum_of_depths(0),
        tree.maximum_depth(0),
    );
    let second = (
        tree.count_leaves(),
        tree.sum_of_depths(0),
        tree.maximum_depth(0),
    );

    first == second
}

#[quickcheck]
fn leaf_walk_matches_recursion(keys: Keys) -> bool {
    let tree: Tree = keys.0.into_iter().collect();
    let depths: Vec<usize> = tree.leaf_depths().collect();

    depths.len() == tree.count_leaves()
        && depths.iter().sum::<usize>() == tree.sum_of_depths(0)
        && depths.iter().copied().max().unwrap_or(0) == tree.maximum_depth(0)
}
