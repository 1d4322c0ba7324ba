//! Single rotations around a chosen element.
//!
//! The node to rotate is found by an ordinary BST descent, then its subtree is swapped for the
//! rotated one on the way back up. A rotation only moves nodes between levels so the in-order
//! sequence, and with it the BST invariant, is unchanged.

use std::cmp::Ordering;

use crate::tree::{Link, Node, Tree};

#[derive(Clone, Copy, Debug)]
enum Direction {
    Left,
    Right,
}

impl<T> Tree<T> {
    /// Rotates the node holding `element` to the left, promoting its right child into its place.
    ///
    /// Nothing happens if `element` isn't in the tree or its node has no right child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   Option<parent>             Option<parent>
    ///       /                          /
    ///   old_root                   new_root
    ///    /    \                     /    \
    ///   x   new_root  rotate ->  old_root  z
    ///        /  \                 /  \
    ///       y    z               x    y
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [1, 2, 3].into_iter().collect();
    /// tree.rotate_left(&1);
    ///
    /// assert_eq!(tree.levels().collect::<Vec<_>>(), [vec![&2], vec![&1, &3]]);
    /// ```
    pub fn rotate_left(&mut self, element: &T)
    where
        T: Ord,
    {
        self.root = rotate_at(self.root.take(), element, Direction::Left);
    }

    /// Rotates the node holding `element` to the right, promoting its left child into its place.
    ///
    /// Nothing happens if `element` isn't in the tree or its node has no left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      Option<parent>            Option<parent>
    ///         /                         /
    ///      old_root                  new_root
    ///       /     \                  /     \
    ///   new_root   z    rotate ->   x    old_root
    ///    /  \                              /  \
    ///   x    y                            y    z
    /// ```
    pub fn rotate_right(&mut self, element: &T)
    where
        T: Ord,
    {
        self.root = rotate_at(self.root.take(), element, Direction::Right);
    }
}

fn rotate_at<T: Ord>(link: Link<T>, element: &T, direction: Direction) -> Link<T> {
    let Some(mut node) = link else {
        log::debug!("rotate {direction:?}: element not found");
        return None;
    };
    match element.cmp(&node.element) {
        Ordering::Less => node.left = rotate_at(node.left.take(), element, direction),
        Ordering::Greater => node.right = rotate_at(node.right.take(), element, direction),
        Ordering::Equal => {
            return Some(match direction {
                Direction::Left => rotate_left(node),
                Direction::Right => rotate_right(node),
            })
        }
    }

    Some(node)
}

fn rotate_left<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut new_root) = old_root.right.take() else {
        log::debug!("rotate Left: node has no right child");
        return old_root;
    };
    log::trace!("rotate Left: promoting right child");
    old_root.right = new_root.left.take();
    new_root.left = Some(old_root);
    new_root
}

fn rotate_right<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut new_root) = old_root.left.take() else {
        log::debug!("rotate Right: node has no left child");
        return old_root;
    };
    log::trace!("rotate Right: promoting left child");
    old_root.left = new_root.right.take();
    new_root.right = Some(old_root);
    new_root
}
