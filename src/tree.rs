//! The recursive [`Tree`] and all of its operations.
//!
//! Every operation that changes the tree works in place on `&mut Tree`. A
//! subtree that has to be replaced (e.g. when a node with one child is
//! deleted) is moved into its parent's slot with [`mem::take`] so no node is
//! ever shared between two owners.

use std::cmp::Ordering;
use std::mem;

use log::{debug, trace};

use crate::error::InvariantError;
use crate::iter::Iter;

/// A Binary Search Tree of unique `i32` values. This can be used for
/// inserting, finding, and deleting values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree {
    /// A marker for the empty subtree at the bottom of the tree. It holds
    /// no value and has no children.
    Empty,
    /// A `Node` that has a value and two children (which are both `Tree`s).
    /// This enum trivially wraps the [`Node`] struct.
    Node(Node),
}

/// A `Node` holds exactly one value. It always has two children although
/// those children may be [`Empty`][Tree::Empty].
///
/// There is no public constructor - nodes are only created by inserting into
/// a [`Tree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    value: i32,
    left: Box<Tree>,
    right: Box<Tree>,
}

impl Node {
    fn leaf(value: i32) -> Self {
        Self {
            value,
            left: Box::new(Tree::Empty),
            right: Box::new(Tree::Empty),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The subtree holding every value smaller than this node's value.
    pub fn left(&self) -> &Tree {
        &self.left
    }

    /// The subtree holding every value larger than this node's value.
    pub fn right(&self) -> &Tree {
        &self.right
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tree {
    // Dropping recursively would overflow the stack on a tree that was built
    // from sorted input (a list in disguise) so children are moved onto a heap
    // stack first.
    fn drop(&mut self) {
        let Self::Node(node) = self else {
            return;
        };
        if node.left.is_empty() && node.right.is_empty() {
            return;
        }

        let mut stack = vec![mem::take(&mut *node.left), mem::take(&mut *node.right)];
        while let Some(mut tree) = stack.pop() {
            if let Self::Node(node) = &mut tree {
                stack.push(mem::take(&mut *node.left));
                stack.push(mem::take(&mut *node.right));
            }
        }
    }
}

impl From<Option<i32>> for Tree {
    /// Builds a tree from an optional root value. `None` gives an empty tree.
    fn from(root: Option<i32>) -> Self {
        root.map_or_else(Self::new, Self::with_root)
    }
}

impl FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Generates a `Tree` holding only `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let tree = Tree::with_root(7);
    /// assert!(tree.contains(7));
    /// assert_eq!(tree, Tree::from(Some(7)));
    /// assert_eq!(Tree::from(None), Tree::new());
    /// ```
    pub fn with_root(value: i32) -> Self {
        Self::Node(Node::leaf(value))
    }

    /// Returns `true` if this tree holds no values.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if `value` is stored somewhere in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(42));
    /// ```
    pub fn contains(&self, value: i32) -> bool {
        match self {
            Self::Empty => false,
            Self::Node(n) => match value.cmp(&n.value) {
                Ordering::Less => n.left.contains(value),
                Ordering::Equal => true,
                Ordering::Greater => n.right.contains(value),
            },
        }
    }

    /// Inserts `value` into the tree. Inserting a value that is already
    /// present does nothing. The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: i32) {
        match self {
            Self::Empty => {
                trace!("inserting {value} as a new leaf");
                *self = Self::with_root(value);
            }
            Self::Node(n) => match value.cmp(&n.value) {
                Ordering::Less => n.left.insert(value),
                Ordering::Equal => {}
                Ordering::Greater => n.right.insert(value),
            },
        }
    }

    /// Deletes `value` from the tree, returning whether it was present.
    /// Deleting a value that isn't in the tree does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let mut tree: Tree = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.delete(2));
    /// assert!(!tree.delete(2));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 3]);
    /// ```
    pub fn delete(&mut self, value: i32) -> bool {
        let Self::Node(node) = self else {
            debug!("{value} is not in the tree, nothing to delete");
            return false;
        };

        match value.cmp(&node.value) {
            Ordering::Less => node.left.delete(value),
            Ordering::Greater => node.right.delete(value),
            Ordering::Equal => {
                self.delete_root();
                true
            }
        }
    }

    /// Removes the value stored at the root of this tree, restructuring the
    /// tree so that it still holds every other value in order.
    ///
    /// - A leaf becomes `Empty`.
    /// - A node with one child is replaced by that child.
    /// - A node with two children takes its predecessor's value (the largest
    ///   value in its left subtree) and the predecessor is removed from the
    ///   left subtree.
    ///
    /// Must only be called on a non-empty tree; debug builds panic otherwise.
    fn delete_root(&mut self) {
        debug_assert!(!self.is_empty(), "`delete_root` called on an empty tree");
        let Self::Node(node) = self else {
            return;
        };

        match (node.left.is_empty(), node.right.is_empty()) {
            (true, true) => {
                trace!("deleting leaf {}", node.value);
                *self = Self::Empty;
            }
            (true, false) => {
                trace!("deleting {} by promoting its right subtree", node.value);
                let right = mem::take(&mut *node.right);
                *self = right;
            }
            (false, true) => {
                trace!("deleting {} by promoting its left subtree", node.value);
                let left = mem::take(&mut *node.left);
                *self = left;
            }
            (false, false) => {
                let predecessor = node.left.take_max();
                debug_assert!(predecessor.is_some(), "non-empty left subtree has no maximum");
                if let Some(predecessor) = predecessor {
                    trace!("replacing {} with its predecessor {predecessor}", node.value);
                    node.value = predecessor;
                }
            }
        }
    }

    /// Removes the largest value from this tree and returns it.
    fn take_max(&mut self) -> Option<i32> {
        let Self::Node(node) = self else {
            return None;
        };
        if !node.right.is_empty() {
            return node.right.take_max();
        }

        let max = node.value;
        // No right child so this is at most the single child case.
        self.delete_root();
        Some(max)
    }

    /// Returns the smallest value in the tree.
    pub fn min(&self) -> Option<i32> {
        match self {
            Self::Empty => None,
            Self::Node(n) => n.left.min().or(Some(n.value)),
        }
    }

    /// Returns the largest value in the tree.
    pub fn max(&self) -> Option<i32> {
        match self {
            Self::Empty => None,
            Self::Node(n) => n.right.max().or(Some(n.value)),
        }
    }

    /// Counts the values in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Gets the height of this tree. An empty tree has a height of 0 and a
    /// single node has a height of 1.
    pub fn height(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => n.left.height().max(n.right.height()) + 1,
        }
    }

    /// Iterates over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use intbst::Tree;
    ///
    /// let tree: Tree = [5, 2, 8, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 2, 5, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Checks that every value is strictly greater than everything in its
    /// left subtree and strictly less than everything in its right subtree.
    ///
    /// A tree built only through this crate's operations always passes. A
    /// failure is a bug in the tree, not in the caller.
    pub fn check_invariant(&self) -> Result<(), InvariantError> {
        self.check_bounds(None, None)
    }

    fn check_bounds(&self, lower: Option<i32>, upper: Option<i32>) -> Result<(), InvariantError> {
        let Self::Node(node) = self else {
            return Ok(());
        };

        let value = node.value;
        if lower.is_some_and(|l| value <= l) || upper.is_some_and(|u| value >= u) {
            return Err(InvariantError::OutOfOrder {
                value,
                lower,
                upper,
            });
        }

        node.left.check_bounds(lower, Some(value))?;
        node.right.check_bounds(Some(value), upper)
    }
}
