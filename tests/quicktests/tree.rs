use balanced_bst::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::invariants::assert_avl;
use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`, checking after each one that the tree
/// is still a valid AVL tree holding the same items as the set.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(tree.insert(x.clone()), set.insert(x.clone()));
            }
            Op::Remove(x) => {
                assert_eq!(tree.remove(x), set.take(x));
            }
            Op::MakeTree(x) => {
                let view = tree.locate(x);
                let copy = view.make_tree();
                assert_avl(&copy);
                assert!(copy.iter().eq(view.in_order_iter()));
                assert!(copy.level_order_iter().eq(view.level_order_iter()));
            }
        }

        assert_avl(tree);
        assert!(tree.iter().eq(set.iter()));
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    set.iter().all(|x| tree.contains(x)) && tree.len() == set.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    assert_avl(&tree);

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x) && tree.locate(x).is_empty())
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let items: Vec<_> = tree.iter().collect();

    items.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn duplicates_are_ignored(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before: Vec<_> = tree.level_order_iter().copied().collect();

    for x in &xs {
        assert!(!tree.insert(*x));
    }

    tree.level_order_iter().copied().eq(before)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
        assert_avl(&tree);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

fn sorted<'a>(iter: impl Iterator<Item = &'a i8>) -> Vec<i8> {
    let mut items: Vec<_> = iter.copied().collect();
    items.sort_unstable();
    items
}

#[quickcheck]
fn traversals_visit_every_item_once(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let expected: Vec<_> = tree.iter().copied().collect();

    sorted(tree.pre_order_iter()) == expected
        && sorted(tree.post_order_iter()) == expected
        && sorted(tree.level_order_iter()) == expected
}

#[quickcheck]
fn make_tree_is_independent(xs: Vec<i8>, pivot: i8, more: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.insert(pivot);

    let before: Vec<_> = tree.level_order_iter().copied().collect();
    let view = tree.locate(&pivot);
    let view_before: Vec<_> = view.level_order_iter().copied().collect();

    let mut copy = view.make_tree();
    for x in &more {
        copy.insert(*x);
        copy.remove(&pivot);
    }
    assert_avl(&copy);

    view.level_order_iter().copied().eq(view_before)
        && tree.level_order_iter().copied().eq(before)
}
