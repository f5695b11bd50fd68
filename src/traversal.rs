//! Lazy iterators over the items of a [`Tree`] or [`Subtree`](crate::Subtree).
//!
//! Depth-first orders keep their pending nodes on an explicit stack and level order keeps them
//! in a queue, so walking a tree never recurses.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::tree::{NodeId, Tree};

/// Yields each item before the items of its left subtree, then those of its right subtree.
pub struct PreOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, root: Option<NodeId>) -> Self {
        Self {
            tree,
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.node(self.stack.pop()?);
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(&node.item)
    }
}

impl<'a, T> FusedIterator for PreOrder<'a, T> {}

/// Yields the items in ascending order.
pub struct InOrder<'a, T> {
    tree: &'a Tree<T>,
    /// The nodes whose left subtree is being (or has been) yielded but which haven't been yet.
    stack: Vec<NodeId>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, root: Option<NodeId>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<NodeId>) {
        while let Some(id) = link {
            self.stack.push(id);
            link = self.tree.node(id).left;
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node = tree.node(self.stack.pop()?);
        self.push_left_spine(node.right);
        Some(&node.item)
    }
}

impl<'a, T> FusedIterator for InOrder<'a, T> {}

/// Yields each item after the items of both of its subtrees.
pub struct PostOrder<'a, T> {
    tree: &'a Tree<T>,
    /// Nodes still to visit, flagged with whether their children were already pushed.
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, root: Option<NodeId>) -> Self {
        Self {
            tree,
            stack: root.map(|id| (id, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, expanded) = self.stack.pop()?;
            let node = self.tree.node(id);
            if expanded {
                return Some(&node.item);
            }

            self.stack.push((id, true));
            self.stack.extend(node.right.map(|right| (right, false)));
            self.stack.extend(node.left.map(|left| (left, false)));
        }
    }
}

impl<'a, T> FusedIterator for PostOrder<'a, T> {}

/// Yields the items level by level from the root down, left to right within a level.
pub struct LevelOrder<'a, T> {
    tree: &'a Tree<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, root: Option<NodeId>) -> Self {
        Self {
            tree,
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.node(self.queue.pop_front()?);
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(&node.item)
    }
}

impl<'a, T> FusedIterator for LevelOrder<'a, T> {}
