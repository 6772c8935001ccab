//! An unbalanced Binary Search Tree (BST) of unique `i32` values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. This one is defined recursively:
//! a [`Tree`] is either [`Empty`][Tree::Empty] or a [`Node`] holding one value
//! and two child `Tree`s. The invariants are:
//!
//! 1. For every `Node`, every value in its left subtree is less than its own value.
//! 2. For every `Node`, every value in its right subtree is greater than its own value.
//!
//! Values are unique, so inserting a value that is already present does nothing.
//! No rebalancing is performed - the order of insertion determines the shape of
//! the tree and so searching takes `O(height)` which may be `O(N)`.
//!
//! Emptiness is part of the type. An empty tree is the `Empty` variant and
//! carries nothing, so there is no way to build a node without a value.
//!
//! # Examples
//!
//! ```
//! use intbst::Tree;
//!
//! let mut tree = Tree::new();
//! assert!(tree.is_empty());
//!
//! for x in [8, 3, 10, 1, 6] {
//!     tree.insert(x);
//! }
//! assert!(tree.contains(6));
//! assert!(!tree.contains(5));
//!
//! // Deleting the root promotes its predecessor.
//! tree.delete(8);
//! assert!(!tree.contains(8));
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 3, 6, 10]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod tree;

pub use error::InvariantError;
pub use iter::Iter;
pub use tree::{Node, Tree};
