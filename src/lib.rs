//! This crate builds a Binary Sort Tree out of random keys and measures how
//! balanced it turned out, mostly for educational purposes.
//!
//! ## Binary Sort Tree
//!
//! A Binary Sort Tree is a binary tree where every `Node` stores a key and
//! has up to two child `Node`s. Its invariants are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key
//!    strictly less than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than or equal to its own key.
//!
//! > `Node`s with no children are called "leaves". The depth of a `Node` is
//! > the number of edges between it and the root.
//!
//! Nothing here rebalances the tree. Inserting keys in ascending order gives
//! a chain whose only leaf sits at depth `N - 1`. Inserting keys in random
//! order tends to give a bushy tree whose leaves sit at depth `O(lg N)`,
//! which is what [`random::random_tree`] and [`stats::Stats`] let you see:
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use random_bst::random::{random_tree, TREE_SIZE};
//! use random_bst::stats::Stats;
//!
//! let tree = random_tree(&mut StdRng::seed_from_u64(1), TREE_SIZE);
//! let stats = Stats::of(&tree).unwrap();
//!
//! assert!(stats.max_depth < TREE_SIZE / 10);
//! ```

#![deny(missing_docs)]

pub mod random;
pub mod stats;
pub mod tree;
