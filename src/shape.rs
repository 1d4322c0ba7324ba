//! Whole-tree structural operations: deep copies, reflections and shape comparisons.
//!
//! Element equality between trees (same shape and same element at every position) is the derived
//! [`PartialEq`] on [`Tree`].

use crate::tree::{Link, Node, Tree};

impl<T> Tree<T> {
    /// Returns a deep copy of this tree. The copy shares no nodes with `self`, so changing one never
    /// affects the other.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let mut copy = tree.copy();
    /// assert_eq!(tree, copy);
    ///
    /// copy.remove(&1);
    /// assert!(tree.contains(&1));
    /// assert_ne!(tree, copy);
    /// ```
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        self.clone()
    }

    /// Returns a new tree that is the left-right reflection of this one. `self` is unchanged.
    ///
    /// The result is ordered in reverse, so it is generally not a valid BST for the original
    /// ordering. It is meant for shape comparisons like [`Tree::is_mirror`].
    pub fn mirror(&self) -> Self
    where
        T: Clone,
    {
        Self {
            root: mirror(&self.root),
        }
    }

    /// Returns `true` if both trees have the same shape, ignoring the elements entirely.
    pub fn compare_structure<U>(&self, other: &Tree<U>) -> bool {
        same_shape(&self.root, &other.root)
    }

    /// Returns `true` if `other` is the mirror image of this tree, elements included.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [100, 50, 150, 40].into_iter().collect();
    ///
    /// assert!(tree.is_mirror(&tree.mirror()));
    /// assert!(!tree.is_mirror(&tree.copy()));
    /// ```
    pub fn is_mirror(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        is_mirror(&self.root, &other.root)
    }

    /// Returns `true` if every node has either no children or two. An empty tree is full.
    pub fn is_full(&self) -> bool {
        is_full(&self.root)
    }
}

fn mirror<T: Clone>(link: &Link<T>) -> Link<T> {
    link.as_deref().map(|node| {
        Box::new(Node {
            element: node.element.clone(),
            left: mirror(&node.right),
            right: mirror(&node.left),
        })
    })
}

fn same_shape<T, U>(a: &Link<T>, b: &Link<U>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => same_shape(&a.left, &b.left) && same_shape(&a.right, &b.right),
        _ => false,
    }
}

fn is_mirror<T: PartialEq>(a: &Link<T>, b: &Link<T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.element == b.element && is_mirror(&a.right, &b.left) && is_mirror(&a.left, &b.right)
        }
        _ => false,
    }
}

fn is_full<T>(link: &Link<T>) -> bool {
    match link.as_deref() {
        None => true,
        Some(node) => match (&node.left, &node.right) {
            (None, None) => true,
            (Some(_), Some(_)) => is_full(&node.left) && is_full(&node.right),
            _ => false,
        },
    }
}
