//! Structural statistics over a [`Tree`]: how many leaves it has, how deep
//! they sit on average, and how deep the deepest one is.
//!
//! Depth is the number of edges from the root, so the root is at depth `0`.
//! The traversals take the depth of the subtree they are given, and are
//! called on the whole tree with `0`.
//!
//! # Examples
//!
//! ```
//! use random_bst::stats::Stats;
//! use random_bst::tree::Tree;
//!
//! let tree: Tree = vec![5.0, 3.0, 8.0].into_iter().collect();
//!
//! assert_eq!(tree.count_leaves(), 2);
//! assert_eq!(tree.sum_of_depths(0), 2);
//! assert_eq!(tree.maximum_depth(0), 1);
//!
//! let stats = Stats::of(&tree).unwrap();
//! assert_eq!(stats.average_depth(), 1.0);
//! ```

use std::error::Error;
use std::fmt;

use log::debug;

use crate::tree::{Node, Tree};

impl Tree {
    /// Returns the number of nodes in this tree with no children.
    pub fn count_leaves(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) if n.is_leaf() => 1,
            Self::Node(n) => n.left.count_leaves() + n.right.count_leaves(),
        }
    }

    /// Returns the sum of the depths of every leaf in this tree, where this
    /// tree's root sits at `depth`.
    pub fn sum_of_depths(&self, depth: usize) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) if n.is_leaf() => depth,
            Self::Node(n) => n.left.sum_of_depths(depth + 1) + n.right.sum_of_depths(depth + 1),
        }
    }

    /// Returns the depth of the deepest leaf in this tree, where this tree's
    /// root sits at `depth`. An empty tree reports `0`.
    pub fn maximum_depth(&self, depth: usize) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) if n.is_leaf() => depth,
            Self::Node(n) => n
                .left
                .maximum_depth(depth + 1)
                .max(n.right.maximum_depth(depth + 1)),
        }
    }

    /// Walks the tree with an explicit stack and yields the depth of each
    /// leaf, left to right. Unlike the recursive traversals this is safe on
    /// arbitrarily skewed trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_bst::tree::Tree;
    ///
    /// let tree: Tree = vec![1.0, 2.0, 3.0].into_iter().collect();
    /// assert_eq!(tree.leaf_depths().collect::<Vec<_>>(), vec![2]);
    /// ```
    pub fn leaf_depths(&self) -> LeafDepths<'_> {
        LeafDepths {
            stack: self.root().map(|root| (root, 0)).into_iter().collect(),
        }
    }
}

/// Iterator over leaf depths returned by [`Tree::leaf_depths`].
pub struct LeafDepths<'a> {
    stack: Vec<(&'a Node, usize)>,
}

impl<'a> Iterator for LeafDepths<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some((node, depth)) = self.stack.pop() {
            if node.is_leaf() {
                return Some(depth);
            }
            // Right first so the left subtree is popped first.
            if let Some(right) = node.right.root() {
                self.stack.push((right, depth + 1));
            }
            if let Some(left) = node.left.root() {
                self.stack.push((left, depth + 1));
            }
        }
        None
    }
}

/// The reason statistics couldn't be computed for a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The tree has no nodes, so it has no leaves to average over.
    EmptyTree,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTree => write!(f, "cannot compute leaf statistics of an empty tree"),
        }
    }
}

impl Error for StatsError {}

/// Leaf statistics of a non-empty tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// How many leaves the tree has. Always at least 1.
    pub leaf_count: usize,
    /// The sum of the depths of all the leaves.
    pub depth_sum: usize,
    /// The depth of the deepest leaf.
    pub max_depth: usize,
}

impl Stats {
    /// Runs the three traversals over `tree`.
    ///
    /// Returns [`StatsError::EmptyTree`] if `tree` has no leaves, which only
    /// happens when it has no nodes at all.
    pub fn of(tree: &Tree) -> Result<Self, StatsError> {
        let leaf_count = tree.count_leaves();
        if leaf_count == 0 {
            return Err(StatsError::EmptyTree);
        }

        let stats = Self {
            leaf_count,
            depth_sum: tree.sum_of_depths(0),
            max_depth: tree.maximum_depth(0),
        };
        debug!("computed {:?}", stats);
        Ok(stats)
    }

    /// The mean depth of the leaves.
    pub fn average_depth(&self) -> f64 {
        self.depth_sum as f64 / self.leaf_count as f64
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of leaves:  {}", self.leaf_count)?;
        // `{:?}` keeps the decimal point on whole numbers, e.g. `2.0`.
        writeln!(f, "Average depth:  {:?}", self.average_depth())?;
        write!(f, "Maximum depth:  {}", self.max_depth)
    }
}
