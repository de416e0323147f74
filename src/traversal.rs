//! Walking a [`Tree`] in one of four orders. Each order comes in two flavors:
//! [`Tree::visit`] hands every [`Node`] to a closure and the materializing
//! methods ([`Tree::inorder`] and friends) collect the values instead.
//!
//! Walks are computed fresh on every call with an explicit stack or queue.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Order, Tree};
//!
//! let tree = Tree::from_values(1..=7);
//!
//! assert_eq!(tree.level_order(), [&4, &2, &6, &1, &3, &5, &7]);
//! assert_eq!(tree.postorder(), [&1, &3, &2, &5, &7, &6, &4]);
//!
//! let mut heights = Vec::new();
//! tree.visit(Order::Preorder, |node| heights.push(node.height()));
//! assert_eq!(heights, [2, 1, 0, 0, 1, 0, 0]);
//! ```

use std::collections::VecDeque;

use crate::tree::{Node, Tree};

/// The order in which nodes are visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first: the root, then every node at depth 1 from left to right, and so on.
    LevelOrder,
    /// A node, then its left subtree, then its right subtree.
    Preorder,
    /// The left subtree, then the node, then the right subtree. This yields
    /// values in ascending order.
    Inorder,
    /// The left subtree, then the right subtree, then the node.
    Postorder,
}

impl<T> Tree<T> {
    /// Calls `visit` once for every node in the given order. Nothing is called
    /// for an empty tree.
    pub fn visit<'a, F>(&'a self, order: Order, visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        let Some(root) = self.root() else {
            return;
        };
        match order {
            Order::LevelOrder => walk_level_order(root, visit),
            Order::Preorder => walk_preorder(root, visit),
            Order::Inorder => walk_inorder(root, visit),
            Order::Postorder => walk_postorder(root, visit),
        }
    }

    /// The values of the tree in the given order.
    pub fn values(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.visit(order, |node| values.push(node.value()));
        values
    }

    /// The values in [`Order::LevelOrder`].
    pub fn level_order(&self) -> Vec<&T> {
        self.values(Order::LevelOrder)
    }

    /// The values in [`Order::Preorder`].
    pub fn preorder(&self) -> Vec<&T> {
        self.values(Order::Preorder)
    }

    /// The values in [`Order::Inorder`], i.e. sorted ascending.
    pub fn inorder(&self) -> Vec<&T> {
        self.values(Order::Inorder)
    }

    /// The values in [`Order::Postorder`].
    pub fn postorder(&self) -> Vec<&T> {
        self.values(Order::Postorder)
    }
}

fn walk_level_order<'a, T>(root: &'a Node<T>, mut visit: impl FnMut(&'a Node<T>)) {
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        queue.extend(node.left());
        queue.extend(node.right());
        visit(node);
    }
}

fn walk_preorder<'a, T>(root: &'a Node<T>, mut visit: impl FnMut(&'a Node<T>)) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visit(node);
        // Right goes first so left comes off the stack first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

fn walk_inorder<'a, T>(root: &'a Node<T>, mut visit: impl FnMut(&'a Node<T>)) {
    let mut stack = Vec::new();
    let mut current = Some(root);
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        let Some(node) = stack.pop() else {
            break;
        };
        visit(node);
        current = node.right();
    }
}

pub(crate) fn walk_postorder<'a, T>(root: &'a Node<T>, visit: impl FnMut(&'a Node<T>)) {
    // Node, right, left is exactly postorder backwards.
    let mut stack = vec![root];
    let mut reversed = Vec::new();
    while let Some(node) = stack.pop() {
        reversed.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    reversed.into_iter().rev().for_each(visit);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders() {
        let tree = Tree::from_values(1..=7);

        assert_eq!(tree.level_order(), [&4, &2, &6, &1, &3, &5, &7]);
        assert_eq!(tree.preorder(), [&4, &2, &1, &3, &6, &5, &7]);
        assert_eq!(tree.inorder(), [&1, &2, &3, &4, &5, &6, &7]);
        assert_eq!(tree.postorder(), [&1, &3, &2, &5, &7, &6, &4]);
    }

    #[test]
    fn test_orders_uneven_tree() {
        let mut tree = Tree::new();
        tree.extend([5, 3, 8, 1, 4, 9, 10]);

        assert_eq!(tree.level_order(), [&5, &3, &8, &1, &4, &9, &10]);
        assert_eq!(tree.preorder(), [&5, &3, &1, &4, &8, &9, &10]);
        assert_eq!(tree.inorder(), [&1, &3, &4, &5, &8, &9, &10]);
        assert_eq!(tree.postorder(), [&1, &4, &3, &10, &9, &8, &5]);
    }

    #[test]
    fn test_empty_tree() {
        let tree = Tree::<i32>::new();
        let mut visited = 0;

        for order in [
            Order::LevelOrder,
            Order::Preorder,
            Order::Inorder,
            Order::Postorder,
        ] {
            assert!(tree.values(order).is_empty());
            tree.visit(order, |_| visited += 1);
        }
        assert_eq!(visited, 0);
    }

    #[test]
    fn test_visit_matches_values() {
        let tree = Tree::from_values([10, 20, 30, 40, 50, 60]);

        for order in [
            Order::LevelOrder,
            Order::Preorder,
            Order::Inorder,
            Order::Postorder,
        ] {
            let mut visited = Vec::new();
            tree.visit(order, |node| visited.push(node.value()));
            assert_eq!(visited, tree.values(order));
        }
    }

    #[test]
    fn test_visit_sees_nodes() {
        let tree = Tree::from_values(1..=7);
        let mut depths = Vec::new();
        tree.visit(Order::LevelOrder, |node| depths.push(tree.depth(node).unwrap()));

        assert_eq!(depths, [0, 1, 1, 2, 2, 2, 2]);
    }

    #[test]
    fn test_fresh_after_mutation() {
        let mut tree = Tree::from_values(1..=3);
        let before: Vec<i32> = tree.inorder().into_iter().copied().collect();

        tree.insert(4);
        tree.delete(&1);

        assert_eq!(before, [1, 2, 3]);
        assert_eq!(tree.inorder(), [&2, &3, &4]);
    }
}
