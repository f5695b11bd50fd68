use balanced_bst::{Subtree, Tree};

/// Recomputes the height of `sub` from scratch, checking on the way down that every node is
/// balanced, that its stored height is right, and that its items are ordered.
fn checked_height<T: Ord>(sub: Subtree<'_, T>, low: Option<&T>, high: Option<&T>) -> usize {
    let item = match sub.item() {
        Some(item) => item,
        None => return 0,
    };

    assert!(low.map_or(true, |low| low < item), "left subtree out of order");
    assert!(high.map_or(true, |high| item < high), "right subtree out of order");

    let left = checked_height(sub.left_child(), low, Some(item));
    let right = checked_height(sub.right_child(), Some(item), high);

    assert!(
        (left as isize - right as isize).abs() <= 1,
        "unbalanced node: left height {}, right height {}",
        left,
        right
    );

    let height = left.max(right) + 1;
    assert_eq!(sub.height(), height, "stored height is stale");
    height
}

/// Panics unless `tree` is an ordered, balanced AVL tree whose length matches its contents.
pub(crate) fn assert_avl<T: Ord>(tree: &Tree<T>) {
    checked_height(tree.root(), None, None);
    assert_eq!(tree.len(), tree.iter().count());
}
