//! In-order iteration over a [`Tree`].

use std::iter::FusedIterator;

use crate::tree::{Node, Tree};

/// An iterator over the values of a [`Tree`] in ascending order.
///
/// Created by [`Tree::iter`]. It keeps the path of nodes still to be visited
/// on its own stack so arbitrarily deep trees can be walked.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(tree: &'a Tree) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    /// Pushes `tree`'s root and all of its left descendants. The last one
    /// pushed is the smallest value in `tree`.
    fn push_left_spine(&mut self, mut tree: &'a Tree) {
        while let Tree::Node(node) = tree {
            self.stack.push(node);
            tree = node.left();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl FusedIterator for Iter<'_> {}
