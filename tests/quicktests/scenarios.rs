use unbalanced_bst::{Tree, UnderflowError};

use crate::init_logging;

fn sample() -> Tree<i32> {
    let mut tree = Tree::new();
    for x in [100, 50, 150, 40, 45] {
        tree.insert(x);
    }

    tree
}

fn levels(tree: &Tree<i32>) -> Vec<Vec<i32>> {
    tree.levels()
        .map(|level| level.into_iter().copied().collect())
        .collect()
}

#[test]
fn five_element_tree() {
    init_logging();
    let tree = sample();

    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [40, 45, 50, 100, 150]);
    assert_eq!(levels(&tree), [vec![100], vec![50, 150], vec![40], vec![45]]);
    assert!(!tree.is_full());
}

#[test]
fn rotate_right_around_root_keeps_order() {
    init_logging();
    let mut tree = sample();

    tree.rotate_right(&100);

    assert_eq!(tree.find_min(), Ok(&40));
    assert_eq!(levels(&tree), [vec![50], vec![40, 100], vec![45, 150]]);
    assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [40, 45, 50, 100, 150]);
}

#[test]
fn copy_and_mirror_relationships() {
    init_logging();
    let tree = sample();
    let copy = tree.copy();
    let mirror = tree.mirror();

    assert_eq!(tree, copy);
    assert!(!tree.compare_structure(&mirror));
    assert!(tree.compare_structure(&copy));
    assert!(tree.is_mirror(&mirror));
    assert!(!tree.is_mirror(&copy));
}

#[test]
fn empty_tree_underflows() {
    init_logging();
    let mut tree = sample();
    for x in [45, 100, 40, 150, 50] {
        tree.remove(&x);
    }

    assert!(tree.is_empty());
    assert_eq!(tree.find_min().unwrap_err().query(), "find_min");
    assert_eq!(tree.find_max().unwrap_err().query(), "find_max");
    assert!(matches!(tree.find_max(), Err(UnderflowError { .. })));
}

#[test]
fn silent_no_ops_leave_the_tree_alone() {
    init_logging();
    let mut tree = sample();

    tree.insert(45);
    tree.remove(&46);
    tree.rotate_left(&46);
    tree.rotate_right(&150);

    assert_eq!(tree, sample());
}
