//! An unbalanced binary sort tree of `f64` keys.
//!
//! Keys strictly less than a node's key go into its left subtree. Everything
//! else, including keys equal to the node's key, goes right. Nothing is ever
//! rebalanced so the shape of the tree is decided entirely by insertion order.
//!
//! # Examples
//!
//! ```
//! use random_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! tree.insert(5.0);
//! tree.insert(3.0);
//! tree.insert(8.0);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.value(), 5.0);
//! assert_eq!(root.left().root().map(|n| n.value()), Some(3.0));
//! assert_eq!(root.right().root().map(|n| n.value()), Some(8.0));
//! ```

use std::iter::FromIterator;
use std::mem;

/// A binary sort tree. Either empty or a boxed [`Node`] which owns both of
/// its subtrees.
#[derive(Debug)]
pub enum Tree {
    /// No node here. An empty tree, or an absent child.
    Empty,
    /// A node holding a key and its two (possibly empty) subtrees.
    Node(Box<Node>),
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the root node, if there is one.
    pub fn root(&self) -> Option<&Node> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some(n),
        }
    }

    /// Adds `value` to the tree as a new leaf. Exactly one node is added per
    /// call, duplicates included: a key equal to a node's key is sent to that
    /// node's right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1.0);
    /// tree.insert(1.0);
    ///
    /// let root = tree.root().unwrap();
    /// assert!(root.left().is_empty());
    /// assert_eq!(root.right().root().map(|n| n.value()), Some(1.0));
    /// ```
    pub fn insert(&mut self, value: f64) {
        let mut cursor = self;
        while let Self::Node(node) = cursor {
            cursor = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *cursor = Self::Node(Box::new(Node::new(value)));
    }

    /// Counts every node in the tree, leaves and internal nodes alike.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => 1 + n.left.node_count() + n.right.node_count(),
        }
    }

    /// Returns the keys of the tree in sorted (in-order) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use random_bst::tree::Tree;
    ///
    /// let tree: Tree = vec![0.5, 0.25, 0.75, 0.25].into_iter().collect();
    /// assert_eq!(tree.values(), vec![0.25, 0.25, 0.5, 0.75]);
    /// ```
    pub fn values(&self) -> Vec<f64> {
        let mut values = Vec::new();
        let mut stack = Vec::new();
        let mut current = self;

        loop {
            while let Self::Node(n) = current {
                stack.push(n);
                current = &n.left;
            }
            match stack.pop() {
                Some(n) => {
                    values.push(n.value);
                    current = &n.right;
                }
                None => return values,
            }
        }
    }
}

impl Drop for Tree {
    // Unlinks subtrees onto a stack so a long chain doesn't recurse once per level.
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Self::Node(n) = self {
            n.unlink_children(&mut stack);
        }
        while let Some(mut tree) = stack.pop() {
            if let Self::Node(n) = &mut tree {
                n.unlink_children(&mut stack);
            }
        }
    }
}

impl PartialEq for Tree {
    /// Two trees are equal when they have the same shape and the same key at
    /// every position. Walks both trees with an explicit stack.
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (Self::Empty, Self::Empty) => {}
                (Self::Node(a), Self::Node(b)) => {
                    if a.value != b.value {
                        return false;
                    }
                    stack.push((&a.right, &b.right));
                    stack.push((&a.left, &b.left));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Extend<f64> for Tree {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<f64> for Tree {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// A `Node` has a key used for sorting and two children, either of which
/// may be [`Empty`][Tree::Empty]. Once created its key never changes; only
/// empty children are ever replaced.
#[derive(Debug)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) left: Tree,
    pub(crate) right: Tree,
}

impl Node {
    /// Construct a new childless `Node` with the given `value`.
    fn new(value: f64) -> Self {
        Self {
            value,
            left: Tree::Empty,
            right: Tree::Empty,
        }
    }

    /// The key stored in this node.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The subtree of keys strictly less than this node's key.
    pub fn left(&self) -> &Tree {
        &self.left
    }

    /// The subtree of keys greater than or equal to this node's key.
    pub fn right(&self) -> &Tree {
        &self.right
    }

    /// A leaf is a node with no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Moves any non-empty children onto `stack`, leaving this node a leaf.
    fn unlink_children(&mut self, stack: &mut Vec<Tree>) {
        if !self.left.is_empty() {
            stack.push(mem::take(&mut self.left));
        }
        if !self.right.is_empty() {
            stack.push(mem::take(&mut self.right));
        }
    }
}
