//! The owning AVL tree. All nodes live in an arena owned by the [`Tree`] and refer to their
//! children by index, so views into the tree ([`Subtree`]) are nothing more than a borrow of the
//! arena plus the index of the node they start at.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! assert!(tree.contains(&1));
//!
//! // Inserting an item that's already there does nothing.
//! assert!(!tree.insert(2));
//! assert_eq!(tree.len(), 3);
//!
//! // Removing gives the item back.
//! assert_eq!(tree.remove(&2), Some(2));
//! assert_eq!(tree.remove(&2), None);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::subtree::Subtree;
use crate::traversal::{InOrder, LevelOrder, PostOrder, PreOrder};
use crate::util::{Path, Side};

/// Index of a node slot in a [`Tree`]'s arena.
pub(crate) type NodeId = usize;

/// A single item and the links to its children.
pub(crate) struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<T> Node<T> {
    fn leaf(item: T) -> Self {
        Self {
            item,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// A self-balancing Binary Search Tree (specifically, an AVL tree) of unique items.
///
/// The tree owns every node. Subtrees can be inspected through borrowed [`Subtree`] views and
/// copied out into their own `Tree` with [`Subtree::make_tree`].
pub struct Tree<T> {
    nodes: Vec<Option<Node<T>>>,
    /// Slots emptied by `remove`, reused by later inserts.
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// The number of items in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a tree with a single
    /// item has a height of 1.
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// Removes every item from the tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// A view of the whole tree. It is empty when the tree is.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into();
    /// let root = tree.root();
    ///
    /// assert_eq!(root.item(), Some(&2));
    /// assert_eq!(root.left_child().item(), Some(&1));
    /// assert_eq!(root.right_child().item(), Some(&3));
    /// assert!(root.left_child().left_child().is_empty());
    /// ```
    pub fn root(&self) -> Subtree<'_, T> {
        Subtree::new(self, self.root)
    }

    /// Whether `item` is in the tree.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.root().contains(item)
    }

    /// The subtree rooted at the node holding `item`. If `item` isn't in the tree the returned
    /// view is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree: Tree<_> = (1..=7).collect();
    ///
    /// let six = tree.locate(&6);
    /// assert_eq!(six.item(), Some(&6));
    /// assert_eq!(six.in_order_iter().copied().collect::<Vec<_>>(), vec![5, 6, 7]);
    ///
    /// assert!(tree.locate(&42).is_empty());
    /// ```
    pub fn locate(&self, item: &T) -> Subtree<'_, T>
    where
        T: Ord,
    {
        self.root().locate(item)
    }

    /// Inserts `item` into the tree. Returns whether it was added: if an equal item is already
    /// present the tree is left untouched.
    pub fn insert(&mut self, item: T) -> bool
    where
        T: Ord,
    {
        let mut path = Path::new();
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.node(id);
            let side = match item.cmp(&node.item) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return false,
            };
            path.push((id, side));
            cur = node.child(side);
        }

        let leaf = self.alloc(Node::leaf(item));
        self.relink(path.last().copied(), Some(leaf));
        self.len += 1;
        self.retrace(&path);
        true
    }

    /// Removes `item` from the tree and returns it. If the tree doesn't contain `item`, nothing
    /// happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree: Tree<_> = vec![2, 1, 3].into();
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&42), None);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, item: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut path = Path::new();
        let mut cur = self.root;
        let target = loop {
            let id = cur?;
            let node = self.node(id);
            let side = match item.cmp(&node.item) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => break id,
            };
            path.push((id, side));
            cur = node.child(side);
        };

        let (left, right) = {
            let node = self.node(target);
            (node.left, node.right)
        };
        let removed = match (left, right) {
            // With two children the in-order successor (the smallest item of the right subtree)
            // takes the place of the removed item and its own node is spliced out instead.
            (Some(_), Some(right)) => {
                path.push((target, Side::Right));
                let mut successor = right;
                while let Some(left) = self.node(successor).left {
                    path.push((successor, Side::Left));
                    successor = left;
                }

                let orphan = self.node(successor).right;
                self.relink(path.last().copied(), orphan);
                let successor_item = self.release(successor);
                mem::replace(&mut self.node_mut(target).item, successor_item)
            }
            (child, None) | (None, child) => {
                self.relink(path.last().copied(), child);
                self.release(target)
            }
        };

        self.len -= 1;
        self.retrace(&path);
        Some(removed)
    }

    /// Visits every item root first, then the left subtree, then the right subtree.
    pub fn pre_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.root().pre_order(visit)
    }

    /// Visits every item in ascending order.
    pub fn in_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.root().in_order(visit)
    }

    /// Visits every item after both of its subtrees.
    pub fn post_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.root().post_order(visit)
    }

    /// Visits every item level by level from the root down, left to right within a level.
    pub fn level_order<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.root().level_order(visit)
    }

    /// A pre-order iterator over the items.
    pub fn pre_order_iter(&self) -> PreOrder<'_, T> {
        self.root().pre_order_iter()
    }

    /// An iterator over the items in ascending order. Same as [`Tree::iter`].
    pub fn in_order_iter(&self) -> InOrder<'_, T> {
        self.root().in_order_iter()
    }

    /// A post-order iterator over the items.
    pub fn post_order_iter(&self) -> PostOrder<'_, T> {
        self.root().post_order_iter()
    }

    /// A breadth-first iterator over the items.
    pub fn level_order_iter(&self) -> LevelOrder<'_, T> {
        self.root().level_order_iter()
    }

    /// An iterator over the items in ascending order.
    pub fn iter(&self) -> InOrder<'_, T> {
        self.in_order_iter()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes[id]
            .as_ref()
            .expect("linked node ids always point at occupied slots")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes[id]
            .as_mut()
            .expect("linked node ids always point at occupied slots")
    }

    pub(crate) fn height_of(&self, link: Option<NodeId>) -> usize {
        link.map_or(0, |id| self.node(id).height)
    }

    /// Adds a node copied from another tree under `slot` (or as the root), keeping its height.
    /// The caller is responsible for the copied heights being accurate once it's done.
    pub(crate) fn graft(&mut self, slot: Option<(NodeId, Side)>, item: T, height: usize) -> NodeId {
        let id = self.alloc(Node {
            height,
            ..Node::leaf(item)
        });
        self.relink(slot, Some(id));
        self.len += 1;
        id
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) -> T {
        let node = self.nodes[id]
            .take()
            .expect("a node is only released once");
        self.free.push(id);
        node.item
    }

    /// Points `slot` (a parent and one of its sides, or the root when `None`) at `child`.
    fn relink(&mut self, slot: Option<(NodeId, Side)>, child: Option<NodeId>) {
        match slot {
            None => self.root = child,
            Some((parent, Side::Left)) => self.node_mut(parent).left = child,
            Some((parent, Side::Right)) => self.node_mut(parent).right = child,
        }
    }

    /// Walks `path` bottom-up after the position below its last entry changed, fixing heights
    /// and rotating where the AVL invariant broke.
    fn retrace(&mut self, path: &[(NodeId, Side)]) {
        for depth in (0..path.len()).rev() {
            let (id, _) = path[depth];
            let old_height = self.node(id).height;
            let top = self.rebalance(id);

            // Nothing above can change if this subtree kept both its root and its height.
            if top == id && self.node(id).height == old_height {
                return;
            }

            let slot = depth.checked_sub(1).map(|up| path[up]);
            self.relink(slot, Some(top));
        }
    }

    fn update_height(&mut self, id: NodeId) {
        let node = self.node(id);
        let height = self.height_of(node.left).max(self.height_of(node.right)) + 1;
        self.node_mut(id).height = height;
    }

    /// Positive when the left subtree is taller, negative when the right one is.
    fn balance_factor(&self, id: NodeId) -> isize {
        let node = self.node(id);
        self.height_of(node.left) as isize - self.height_of(node.right) as isize
    }

    /// Restores the AVL invariant at `id`, whose children are already balanced, and returns the
    /// root of the resulting subtree.
    fn rebalance(&mut self, id: NodeId) -> NodeId {
        self.update_height(id);
        let balance = self.balance_factor(id);

        let top = if balance > 1 {
            let left = self
                .node(id)
                .left
                .expect("a left-heavy node has a left child");
            if self.balance_factor(left) < 0 {
                let pivot = self.rotate_left(left);
                self.node_mut(id).left = Some(pivot);
            }
            self.rotate_right(id)
        } else if balance < -1 {
            let right = self
                .node(id)
                .right
                .expect("a right-heavy node has a right child");
            if self.balance_factor(right) > 0 {
                let pivot = self.rotate_right(right);
                self.node_mut(id).right = Some(pivot);
            }
            self.rotate_left(id)
        } else {
            id
        };

        // In tests, after balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(test) {
            assert!(self.balance_factor(top).abs() <= 1);
        }
        top
    }

    /// Rotates the right child of `id` up to take its place and returns it. The right child's
    /// left subtree becomes `id`'s right subtree.
    fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let pivot = self
            .node(id)
            .right
            .expect("rotate_left needs a right child");
        let inner = self.node(pivot).left;

        self.node_mut(id).right = inner;
        self.update_height(id);
        self.node_mut(pivot).left = Some(id);
        self.update_height(pivot);
        pivot
    }

    /// Rotates the left child of `id` up to take its place and returns it. The left child's
    /// right subtree becomes `id`'s left subtree.
    fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let pivot = self
            .node(id)
            .left
            .expect("rotate_right needs a left child");
        let inner = self.node(pivot).right;

        self.node_mut(id).left = inner;
        self.update_height(id);
        self.node_mut(pivot).right = Some(id);
        self.update_height(pivot);
        pivot
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        self.root().make_tree()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Trees are equal when they hold the same items, whatever their shape.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut tree = Self::new();
        tree.extend(items);
        tree
    }
}

impl<T: Ord> From<Vec<T>> for Tree<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Tree<T> {
    fn from(items: [T; N]) -> Self {
        IntoIterator::into_iter(items).collect()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
