//! A self-balancing Binary Search Tree (BST) of unique items, with read-only views onto any of
//! its subtrees and a way to copy a subtree out into a tree of its own.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores items in `Node`s. Every `Node` holds one item and up to two
//! children, and the tree keeps two invariants:
//!
//! 1. For every `Node`, all the items in its left subtree are less than its own item.
//! 2. For every `Node`, all the items in its right subtree are greater than its own item.
//!
//! Equal items are never stored twice: inserting an item that's already in the tree does
//! nothing.
//!
//! Searching takes `O(height)`, and visiting the left subtree, then the node, then the right
//! subtree yields the items in sorted order.
//!
//! ## AVL balancing
//!
//! [`Tree`] is an AVL tree: for every `Node` the heights of its two subtrees differ by at most
//! one. Inserts and removals restore this with rotations on their way back up to the root, which
//! keeps the height (and so every search, insert and remove) within `O(lg N)`.
//!
//! ## Subtrees
//!
//! Every position in a tree, including the empty positions below the leaves, can be looked at
//! through a [`Subtree`]. A `Subtree` borrows the tree it points into and supports all of the
//! read-only operations of a tree. [`Subtree::make_tree`] copies it into a new, independent
//! [`Tree`].
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree: Tree<_> = [56, 54, 78, 73, 70, 80].into();
//!
//! assert_eq!(tree.root().item(), Some(&73));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![54, 56, 70, 73, 78, 80]);
//!
//! let mut right = tree.root().right_child().make_tree();
//! right.insert(75);
//! assert!(right.contains(&75));
//! assert!(!tree.contains(&75));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod subtree;
pub mod traversal;
mod tree;
mod util;

pub use subtree::Subtree;
pub use tree::Tree;
