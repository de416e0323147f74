use balanced_bst::{Order, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::ops::Op;

/// What the inorder walk of a tree built from `xs` should be.
fn sorted_unique(xs: &[i16]) -> Vec<i16> {
    xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

fn owned(values: Vec<&i16>) -> Vec<i16> {
    values.into_iter().copied().collect()
}

/// The height a tree built by always splitting at the middle has.
fn minimal_height(len: usize) -> isize {
    if len == 0 {
        -1
    } else {
        len.ilog2() as isize
    }
}

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts,
/// deletes and rebalances we have the same values in both.
#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    for op in ops {
        let agrees = match op {
            Op::Insert(x) => tree.insert(x) == set.insert(x),
            Op::Delete(x) => tree.delete(&x) == set.take(&x),
            Op::Rebalance => {
                tree.rebalance();
                tree.is_balanced()
            }
            Op::Traverse => tree.inorder().into_iter().eq(set.iter()),
        };
        if !agrees || tree.len() != set.len() {
            return false;
        }
    }

    set.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i16>, inserts: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = Tree::from_values(xs);
    tree.extend(inserts);
    for x in &deletes {
        tree.delete(x);
    }

    let values = tree.inorder();
    values.len() == tree.len() && values.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn construct_then_inorder(xs: Vec<i16>) -> bool {
    let tree = Tree::from_values(xs.clone());
    owned(tree.inorder()) == sorted_unique(&xs)
}

#[quickcheck]
fn construct_is_balanced(xs: Vec<i16>) -> bool {
    let tree = Tree::from_values(xs);
    tree.is_balanced() && tree.height() == minimal_height(tree.len())
}

#[quickcheck]
fn rebalance_is_balanced(xs: Vec<i16>, inserts: Vec<i16>, deletes: Vec<i16>) -> bool {
    let mut tree = Tree::from_values(xs);
    tree.extend(inserts);
    for x in &deletes {
        tree.delete(x);
    }
    let before = owned(tree.inorder());

    tree.rebalance();

    tree.is_balanced()
        && tree.height() == minimal_height(tree.len())
        && owned(tree.inorder()) == before
}

#[quickcheck]
fn insert_then_find(xs: Vec<i16>, x: i16) -> bool {
    let mut tree = Tree::from_values(xs);
    tree.insert(x);

    tree.find(&x).map(|n| *n.value()) == Some(x)
}

#[quickcheck]
fn contains_not(xs: Vec<i16>, nots: Vec<i16>) -> bool {
    let tree = Tree::from_values(xs.clone());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn delete_removes_exactly_one(xs: Vec<i16>, inserts: Vec<i16>, x: i16) -> bool {
    let mut tree = Tree::from_values(xs);
    tree.extend(inserts);
    let before = owned(tree.inorder());
    let present = tree.contains(&x);

    let deleted = tree.delete(&x);
    let after = owned(tree.inorder());

    if present {
        let mut expected = before;
        expected.retain(|y| *y != x);
        deleted == Some(x) && tree.find(&x).is_none() && after == expected
    } else {
        deleted.is_none() && after == before
    }
}

#[quickcheck]
fn children_are_one_level_deeper(xs: Vec<i16>, inserts: Vec<i16>) -> bool {
    let mut tree = Tree::from_values(xs);
    tree.extend(inserts);
    let height = tree.height();

    let mut consistent = tree.root().map_or(true, |root| tree.depth(root) == Ok(0));
    tree.visit(Order::Preorder, |node| {
        let Ok(depth) = tree.depth(node) else {
            consistent = false;
            return;
        };
        consistent &= (depth as isize) <= height;
        for child in [node.left(), node.right()].into_iter().flatten() {
            consistent &= tree.depth(child) == Ok(depth + 1);
        }
    });
    consistent
}
