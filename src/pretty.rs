//! Drawing a [`Tree`] sideways with box drawing characters. The right subtree
//! is drawn above a node and the left subtree below it, so reading the output
//! top to bottom goes from the largest value to the smallest.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::from_values([5, 3, 8, 1]);
//! let expected = "\
//! │   ┌── 8
//! └── 5
//!     └── 3
//!         └── 1
//! ";
//! assert_eq!(tree.to_string(), expected);
//! ```

use std::fmt;

use crate::tree::{Node, Tree};

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            None => f.write_str("This tree is empty."),
            Some(root) => write_subtree(f, root, "", true),
        }
    }
}

/// A pending piece of output. Pieces come off the stack in drawing order:
/// the right subtree, then the node's own line, then the left subtree.
enum Step<'a, T> {
    Subtree(&'a Node<T>, String, bool),
    Line(&'a Node<T>, String, bool),
}

fn write_subtree<T>(
    f: &mut fmt::Formatter<'_>,
    root: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result
where
    T: fmt::Display,
{
    let mut stack = vec![Step::Subtree(root, prefix.to_owned(), is_left)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Subtree(node, prefix, is_left) => {
                if let Some(left) = node.left() {
                    let continuation = if is_left { "    " } else { "│   " };
                    stack.push(Step::Subtree(left, format!("{prefix}{continuation}"), true));
                }
                if let Some(right) = node.right() {
                    let continuation = if is_left { "│   " } else { "    " };
                    let right_prefix = format!("{prefix}{continuation}");
                    stack.push(Step::Line(node, prefix, is_left));
                    stack.push(Step::Subtree(right, right_prefix, false));
                } else {
                    stack.push(Step::Line(node, prefix, is_left));
                }
            }
            Step::Line(node, prefix, is_left) => {
                let connector = if is_left { "└── " } else { "┌── " };
                writeln!(f, "{prefix}{connector}{}", node.value())?;
            }
        }
    }

    Ok(())
}
