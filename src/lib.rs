//! This crate exposes a Binary Search Tree (BST) that is balanced when it is
//! built and can be rebuilt into a balanced shape on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). Building the tree from a sorted
//! run of values by always picking the middle value as the subtree root limits the
//! height to `O(lg N)`. Inserting and deleting afterwards does not keep that shape,
//! which is what [`Tree::is_balanced`] and [`Tree::rebalance`] are for.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! // Duplicates are dropped and the middle value becomes the root.
//! let mut tree = Tree::from_values([5, 3, 8, 3, 1]);
//! assert_eq!(tree.inorder(), [&1, &3, &5, &8]);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(5));
//! assert!(tree.is_balanced());
//!
//! // Inserting ascending values skews the right side.
//! for x in 9..12 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod pretty;
mod traversal;
mod tree;

pub use error::{Error, Result};
pub use traversal::Order;
pub use tree::{Node, Tree};
