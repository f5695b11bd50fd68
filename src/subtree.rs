//! Read-only views onto a position in a [`Tree`].
//!
//! A [`Subtree`] borrows the tree it points into, so it can't outlive the tree and the tree can't
//! be modified while the view is alive. To get a subtree you can modify, copy it out with
//! [`Subtree::make_tree`].
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree: Tree<_> = (1..=7).collect();
//!
//! let right = tree.root().right_child();
//! assert_eq!(right.level_order_iter().copied().collect::<Vec<_>>(), vec![6, 5, 7]);
//!
//! // The copy is a tree of its own.
//! let mut copy = right.make_tree();
//! copy.insert(8);
//! assert!(copy.contains(&8));
//! assert!(!tree.contains(&8));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::traversal::{InOrder, LevelOrder, PostOrder, PreOrder};
use crate::tree::{NodeId, Tree};
use crate::util::Side;

/// A view of the subtree rooted at some position of a [`Tree`]. The position may be empty, in
/// which case the view behaves like an empty tree.
pub struct Subtree<'a, T> {
    tree: &'a Tree<T>,
    root: Option<NodeId>,
}

impl<'a, T> Clone for Subtree<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Subtree<'a, T> {}

impl<'a, T> Subtree<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, root: Option<NodeId>) -> Self {
        Self { tree, root }
    }

    /// Whether this view points at an empty position.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The item held at the root of this subtree.
    pub fn item(&self) -> Option<&'a T> {
        let tree = self.tree;
        self.root.map(|id| &tree.node(id).item)
    }

    /// The number of levels in this subtree, 0 when it's empty.
    pub fn height(&self) -> usize {
        self.tree.height_of(self.root)
    }

    /// The number of items in this subtree. This walks the whole subtree.
    pub fn len(&self) -> usize {
        self.pre_order_iter().count()
    }

    /// The left subtree of this subtree's root. Empty if there is no left child, or if this view
    /// is itself empty.
    pub fn left_child(&self) -> Self {
        self.child(Side::Left)
    }

    /// The right subtree of this subtree's root. Empty if there is no right child, or if this
    /// view is itself empty.
    pub fn right_child(&self) -> Self {
        self.child(Side::Right)
    }

    fn child(&self, side: Side) -> Self {
        let root = self.root.and_then(|id| self.tree.node(id).child(side));
        Self::new(self.tree, root)
    }

    /// Whether `item` is in this subtree.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// The subtree of this subtree rooted at the node holding `item`, or an empty view if `item`
    /// isn't in this subtree.
    pub fn locate(&self, item: &T) -> Self
    where
        T: Ord,
    {
        Self::new(self.tree, self.find(item))
    }

    fn find(&self, item: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.tree.node(id);
            cur = match item.cmp(&node.item) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Copies this subtree into a new [`Tree`] with the same shape. The new tree shares nothing
    /// with the tree this view points into. An empty view gives an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree: Tree<_> = (1..=7).collect();
    /// let left = tree.root().left_child().make_tree();
    ///
    /// assert_eq!(left.pre_order_iter().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
    /// assert!(tree.locate(&42).make_tree().is_empty());
    /// ```
    pub fn make_tree(&self) -> Tree<T>
    where
        T: Clone,
    {
        let mut copy = Tree::new();

        // Pairs of a node to copy and where its copy goes in the new tree.
        let mut pending: Vec<(NodeId, Option<(NodeId, Side)>)> =
            self.root.map(|id| (id, None)).into_iter().collect();
        while let Some((id, slot)) = pending.pop() {
            let node = self.tree.node(id);
            let copied = copy.graft(slot, node.item.clone(), node.height);

            if let Some(right) = node.right {
                pending.push((right, Some((copied, Side::Right))));
            }
            if let Some(left) = node.left {
                pending.push((left, Some((copied, Side::Left))));
            }
        }

        copy
    }

    /// Visits every item of this subtree root first, then the left subtree, then the right one.
    pub fn pre_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.pre_order_iter().for_each(visit)
    }

    /// Visits every item of this subtree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into();
    /// let mut seen = Vec::new();
    /// tree.root().in_order(|item| seen.push(*item));
    ///
    /// assert_eq!(seen, vec![1, 2, 3]);
    /// ```
    pub fn in_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.in_order_iter().for_each(visit)
    }

    /// Visits every item of this subtree after both of its own subtrees.
    pub fn post_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.post_order_iter().for_each(visit)
    }

    /// Visits every item of this subtree breadth first.
    pub fn level_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.level_order_iter().for_each(visit)
    }

    /// A pre-order iterator over this subtree.
    pub fn pre_order_iter(&self) -> PreOrder<'a, T> {
        PreOrder::new(self.tree, self.root)
    }

    /// An iterator over this subtree in ascending order.
    pub fn in_order_iter(&self) -> InOrder<'a, T> {
        InOrder::new(self.tree, self.root)
    }

    /// A post-order iterator over this subtree.
    pub fn post_order_iter(&self) -> PostOrder<'a, T> {
        PostOrder::new(self.tree, self.root)
    }

    /// A breadth-first iterator over this subtree.
    pub fn level_order_iter(&self) -> LevelOrder<'a, T> {
        LevelOrder::new(self.tree, self.root)
    }
}

/// Views are equal when they point at the same position of the same tree.
impl<'a, T> PartialEq for Subtree<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.root == other.root
    }
}

impl<'a, T> Eq for Subtree<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for Subtree<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order_iter()).finish()
    }
}

impl<'a, T> IntoIterator for Subtree<'a, T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order_iter()
    }
}
