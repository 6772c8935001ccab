use intbst::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set, checking after every
/// operation that the tree is still ordered. This way we can ensure that
/// after a random smattering of inserts and deletes we have the same values
/// in both.
fn do_ops(ops: &[Op], tree: &mut Tree, set: &mut BTreeSet<i32>) -> bool {
    for op in ops {
        match *op {
            Op::Insert(x) => {
                tree.insert(x.into());
                set.insert(x.into());
            }
            Op::Delete(x) => {
                if tree.delete(x.into()) != set.remove(&i32::from(x)) {
                    return false;
                }
            }
            Op::Iter => {
                if !tree.iter().eq(set.iter().copied()) {
                    return false;
                }
            }
        }

        if tree.check_invariant().is_err() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && set.iter().all(|&x| tree.contains(x))
        && tree.len() == set.len()
        && tree.is_empty() == set.is_empty()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();

    xs.iter().all(|&x| tree.contains(x.into()))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|&x| !tree.contains(x.into()))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    for &delete in &deletes {
        tree.delete(delete.into());
    }

    let mut still_present = xs;
    // We may have inserted the same value multiple times - delete each one.
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|&x| !tree.contains(x.into()))
        && still_present.iter().all(|&x| tree.contains(x.into()))
        && tree.check_invariant().is_ok()
}

#[quickcheck]
fn delete_each_value_leaves_the_rest(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    let values: BTreeSet<i32> = xs.iter().map(|&x| i32::from(x)).collect();

    values.iter().all(|&v| {
        let mut tree = tree.clone();
        tree.delete(v)
            && !tree.contains(v)
            && values.iter().filter(|&&x| x != v).all(|&x| tree.contains(x))
            && tree.check_invariant().is_ok()
    })
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut once: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    once.insert(x.into());
    let mut twice = once.clone();
    twice.insert(x.into());

    once == twice
}

#[quickcheck]
fn delete_absent_is_noop(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree = xs
        .iter()
        .filter(|&&y| y != x)
        .map(|&y| i32::from(y))
        .collect();
    let before = tree.clone();

    !tree.delete(x.into()) && tree == before
}

#[quickcheck]
fn min_max_match_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree = xs.iter().map(|&x| i32::from(x)).collect();
    let set: BTreeSet<i32> = xs.iter().map(|&x| i32::from(x)).collect();

    tree.min() == set.iter().next().copied() && tree.max() == set.iter().next_back().copied()
}

#[quickcheck]
fn single_insert_is_not_empty(x: i32) -> bool {
    let mut tree = Tree::new();
    let was_empty = tree.is_empty();
    tree.insert(x);

    was_empty && !tree.is_empty()
}
