//! A BST that is balanced by construction. Building the tree sorts and
//! deduplicates its input and then always promotes the middle value to be the
//! subtree root. Inserts and deletes afterwards are plain BST operations, so the
//! shape may drift; [`Tree::rebalance`] rebuilds it from scratch.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::from_values([5, 3, 8, 3, 1]);
//!
//! // The duplicate `3` was dropped.
//! assert_eq!(tree.len(), 4);
//!
//! // Inserting an existing value does nothing.
//! assert!(!tree.insert(3));
//! assert!(tree.insert(4));
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.delete(&5), None);
//! assert!(tree.find(&5).is_none());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::traversal::walk_postorder;

/// An owned, possibly empty, subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding distinct values. This can be used for
/// inserting, finding, and deleting values, walking them in several orders, and
/// checking and restoring the balance of the tree.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root().and_then(clone_subtree),
            len: self.len,
        }
    }
}

/// Lists the values in ascending order, like a set.
impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time so a skewed tree doesn't recurse once per level.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of edges on the longest path from the root down to a leaf.
    /// A tree with a single node has height `0` and an empty tree has height `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// assert_eq!(Tree::<i32>::new().height(), -1);
    /// assert_eq!(Tree::from_values([1]).height(), 0);
    /// assert_eq!(Tree::from_values(1..=7).height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        subtree_height(&self.root)
    }

    /// Whether, for every node, the heights of its two subtrees differ by at
    /// most one. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Rebuilds the tree into its minimal height shape. The values are moved
    /// out in sorted order and rebuilt the same way [`Tree::from_values`] does.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in 0..8 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(), 7);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 3);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self) {
        let before = self.height();
        let values = drain_inorder(self.root.take(), self.len);
        self.len = values.len();
        self.root = build_balanced(&mut values.into_iter(), self.len);
        debug!(
            len = self.len,
            before,
            after = self.height(),
            "rebuilt tree from sorted values"
        );
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Builds a balanced tree from the given values. Duplicate values are kept
    /// once.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_values([5, 3, 8, 3, 1]);
    ///
    /// assert_eq!(tree.inorder(), [&1, &3, &5, &8]);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(5));
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();

        let len = values.len();
        let root = build_balanced(&mut values.into_iter(), len);
        debug!(len, height = subtree_height(&root), "built balanced tree");

        Self { root, len }
    }

    /// Inserts the value as a new leaf. Returns `false`, leaving the tree
    /// untouched, if the value was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = insert_link(&mut self.root, value);
        if inserted {
            self.len += 1;
        } else {
            trace!("value already present, nothing inserted");
        }
        inserted
    }

    /// Deletes the node holding the given value and returns the value. If the
    /// tree does not contain the value, nothing happens.
    ///
    /// A node with two children takes the value of its in-order successor (the
    /// leftmost node of its right subtree) and that successor is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::from_values([5, 3, 8, 1]);
    ///
    /// assert_eq!(tree.delete(&5), Some(5));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(8));
    /// assert_eq!(tree.inorder(), [&1, &3, &8]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let deleted = delete_link(&mut self.root, value);
        if deleted.is_some() {
            self.len -= 1;
        } else {
            trace!("value not present, nothing deleted");
        }
        deleted
    }

    /// Potentially finds the node holding the given value. If no node holds
    /// it, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether the tree holds the given value.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// The number of edges from the root to the node holding the same value as
    /// `node`. The node is located by comparing values on the way down, so a
    /// node from another tree is measured by where its value sits in this one.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no node in this tree holds that value.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Error, Tree};
    ///
    /// let tree = Tree::from_values(1..=7);
    /// let leaf = tree.find(&7).unwrap();
    /// assert_eq!(tree.depth(leaf), Ok(2));
    ///
    /// let other = Tree::from_values([42]);
    /// assert_eq!(tree.depth(other.root().unwrap()), Err(Error::NotFound));
    /// ```
    pub fn depth(&self, node: &Node<T>) -> Result<usize> {
        self.depth_of(&node.value)
    }

    /// The number of edges from the root to the node holding `value`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no node in this tree holds `value`.
    pub fn depth_of(&self, value: &T) -> Result<usize> {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Ok(depth),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        Err(Error::NotFound)
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> From<Vec<T>> for Tree<T>
where
    T: Ord,
{
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

/// Inserts each value in turn. Unlike collecting into a new tree this does not
/// rebalance.
impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// A `Node` holds one value and owns its (possibly empty) left and right
/// subtrees. Callers can read a node but never relink it, clone it or own it,
/// so nodes are only ever dropped through their [`Tree`].
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

/// Shows the node's value and only the values of its children.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, holding smaller values.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding larger values.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// The number of edges on the longest path from this node down to a leaf.
    /// A leaf has height `0`.
    pub fn height(&self) -> usize {
        measure(self).height
    }

    /// Whether the subtree rooted at this node is balanced.
    pub fn is_balanced(&self) -> bool {
        measure(self).balanced
    }
}

/// Inserts a new leaf at the first empty link on the search path. Returns
/// `false` if a node already holds the value.
fn insert_link<T: Ord>(mut link: &mut Link<T>, value: T) -> bool {
    while let Some(node) = link {
        link = match value.cmp(&node.value) {
            Ordering::Less => &mut node.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut node.right,
        };
    }
    *link = Some(Box::new(Node::new(value)));
    true
}

/// Deletes the node holding `value` from the subtree at `link`, relinking
/// whatever takes its place.
fn delete_link<T: Ord>(mut link: &mut Link<T>, value: &T) -> Option<T> {
    loop {
        let ordering = value.cmp(&link.as_ref()?.value);
        link = match ordering {
            Ordering::Less => &mut link.as_mut()?.left,
            Ordering::Equal => break,
            Ordering::Greater => &mut link.as_mut()?.right,
        };
    }

    let mut node = link.take()?;
    if node.left.is_some() && node.right.is_some() {
        // With two children the in-order successor takes this node's place. It is the
        // leftmost node of the right subtree so it has no left child of its own.
        let successor = delete_min(&mut node.right)?;
        let deleted = mem::replace(&mut node.value, successor);
        *link = Some(node);
        Some(deleted)
    } else {
        // At most one child, which moves up into the emptied link.
        *link = node.left.take().or(node.right.take());
        Some(node.value)
    }
}

/// Removes the leftmost node of the subtree at `link` and returns its value.
fn delete_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.value)
}

fn subtree_height<T>(link: &Link<T>) -> isize {
    link.as_deref().map_or(-1, |node| node.height() as isize)
}

/// Shape of a subtree gathered in one bottom-up pass.
struct Measure {
    height: usize,
    balanced: bool,
}

/// Computes the height of the subtree and whether every node in it is
/// balanced. Nodes come out of a postorder walk, so when a node is reached the
/// heights of its right and then left subtree sit on top of `heights`.
fn measure<T>(root: &Node<T>) -> Measure {
    let mut heights: Vec<isize> = Vec::new();
    let mut balanced = true;

    walk_postorder(root, |node| {
        let right = match node.right {
            Some(_) => heights.pop().unwrap_or(-1),
            None => -1,
        };
        let left = match node.left {
            Some(_) => heights.pop().unwrap_or(-1),
            None => -1,
        };
        balanced &= left.abs_diff(right) <= 1;
        heights.push(1 + left.max(right));
    });

    Measure {
        height: heights.pop().map_or(0, |height| height as usize),
        balanced,
    }
}

/// Copies the subtree in postorder so children are built before their parent.
fn clone_subtree<T: Clone>(root: &Node<T>) -> Link<T> {
    let mut built: Vec<Box<Node<T>>> = Vec::new();

    walk_postorder(root, |node| {
        let right = node.right.as_ref().and_then(|_| built.pop());
        let left = node.left.as_ref().and_then(|_| built.pop());
        built.push(Box::new(Node {
            value: node.value.clone(),
            left,
            right,
        }));
    });

    built.pop()
}

/// Builds a minimal height tree from the next `len` values, which must be
/// sorted and distinct. The left subtree takes the first `len / 2` values and
/// the next value becomes the root, which is the same as splitting at the
/// middle index.
fn build_balanced<T>(values: &mut impl Iterator<Item = T>, len: usize) -> Link<T> {
    if len == 0 {
        return None;
    }

    let middle = len / 2;
    let left = build_balanced(values, middle);
    let value = values.next()?;
    let right = build_balanced(values, len - middle - 1);

    Some(Box::new(Node { value, left, right }))
}

/// Moves every value out of the subtree in ascending order.
fn drain_inorder<T>(root: Link<T>, len: usize) -> Vec<T> {
    let mut values = Vec::with_capacity(len);
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        let Some(node) = stack.pop() else {
            break;
        };
        let node = *node;
        values.push(node.value);
        current = node.right;
    }
    values
}
