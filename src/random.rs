//! Builds trees out of uniformly random keys.

use log::debug;
use rand::Rng;

use crate::tree::Tree;

/// How many keys the demonstration inserts. One less than a power of two, so
/// a perfectly balanced tree of this size has 10 full levels.
pub const TREE_SIZE: usize = 1023;

/// Draws `count` independent keys uniformly from `[0, 1)` and inserts each,
/// in the order drawn, into a fresh tree.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use random_bst::random::random_tree;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let tree = random_tree(&mut rng, 100);
///
/// assert_eq!(tree.node_count(), 100);
/// assert!(tree.values().iter().all(|x| (0.0..1.0).contains(x)));
/// ```
pub fn random_tree<R>(rng: &mut R, count: usize) -> Tree
where
    R: Rng + ?Sized,
{
    let tree: Tree = (0..count).map(|_| rng.gen::<f64>()).collect();
    debug!("inserted {} random keys", count);
    tree
}
