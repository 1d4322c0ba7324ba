use std::collections::BTreeSet;

use unbalanced_bst::Tree;

use crate::init_logging;

quickcheck::quickcheck! {
    fn in_order_matches_sorted_set(xs: Vec<i8>) -> bool {
        init_logging();
        let tree: Tree<_> = xs.iter().copied().collect();
        let set: BTreeSet<_> = xs.into_iter().collect();

        tree.in_order().eq(set.iter())
    }
}

quickcheck::quickcheck! {
    fn duplicate_insert_changes_nothing(xs: Vec<i8>) -> bool {
        init_logging();
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let before = tree.copy();

        for x in &xs {
            tree.insert(*x);
        }

        tree == before
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        init_logging();
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn remove_present(xs: Vec<i8>, index: usize) -> bool {
        init_logging();
        if xs.is_empty() {
            return true;
        }
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let count = tree.node_count();
        let target = xs[index % xs.len()];

        tree.remove(&target);

        !tree.contains(&target)
            && tree.node_count() == count - 1
            && xs.iter().filter(|x| **x != target).all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn remove_absent(xs: Vec<i8>, absent: i8) -> bool {
        init_logging();
        let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != absent).collect();
        let before = tree.copy();

        tree.remove(&absent);

        tree == before
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        init_logging();
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn copy_is_mirror_only_when_symmetric(xs: Vec<i8>) -> bool {
        init_logging();
        let tree: Tree<_> = xs.into_iter().collect();

        tree.is_mirror(&tree.copy()) == (tree.mirror() == tree)
    }
}
