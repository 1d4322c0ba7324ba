//! The unbalanced BST itself along with its core mutations and queries.
//!
//! Every mutation here follows the same shape: a recursive helper takes ownership of a subtree,
//! rebuilds whatever changed below it, and hands the (possibly different) subtree root back to
//! the caller to store. There are no parent pointers, so nothing else ever has to be fixed up.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//! assert!(tree.find_min().is_err());
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! assert!(tree.contains(&1));
//! assert_eq!(tree.find_min(), Ok(&1));
//! assert_eq!(tree.find_max(), Ok(&3));
//!
//! // Inserting a duplicate does nothing.
//! tree.insert(2);
//! assert_eq!(tree.node_count(), 3);
//!
//! // Neither does removing something that isn't there.
//! tree.remove(&42);
//! assert_eq!(tree.node_count(), 3);
//!
//! tree.remove(&2);
//! assert!(!tree.contains(&2));
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &3]);
//! ```

use std::cmp::Ordering;

use crate::error::UnderflowError;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree. Elements are ordered with [`Ord`] and stored at most once.
///
/// Equality ([`PartialEq`]) compares shape and elements position by position, so two trees
/// holding the same elements in different shapes are *not* equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

/// A single element and the two subtrees it exclusively owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(element: T) -> Box<Self> {
        Box::new(Self {
            element,
            left: None,
            right: None,
        })
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every element, leaving the tree empty.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Counts the nodes in the tree by visiting every one of them.
    pub fn node_count(&self) -> usize {
        node_count(&self.root)
    }

    /// The number of edges on the longest path from the root down to a leaf, or `None` for an
    /// empty tree. A tree with a single element has height 0.
    pub fn height(&self) -> Option<usize> {
        self.root.as_deref().map(Node::height)
    }

    /// Returns the smallest element in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`UnderflowError`] if the tree is empty.
    pub fn find_min(&self) -> Result<&T, UnderflowError> {
        let mut node = self
            .root
            .as_deref()
            .ok_or_else(|| UnderflowError::new("find_min"))?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }

        Ok(&node.element)
    }

    /// Returns the largest element in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`UnderflowError`] if the tree is empty.
    pub fn find_max(&self) -> Result<&T, UnderflowError> {
        let mut node = self
            .root
            .as_deref()
            .ok_or_else(|| UnderflowError::new("find_max"))?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }

        Ok(&node.element)
    }

    /// Returns `true` if an element comparing equal to `element` is in the tree.
    pub fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        contains(&self.root, element)
    }

    /// Inserts `element` into the tree. If an equal element is already present the tree is left
    /// untouched and `element` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.node_count(), 1);
    /// ```
    pub fn insert(&mut self, element: T)
    where
        T: Ord,
    {
        self.root = insert(self.root.take(), element);
    }

    /// Removes the element comparing equal to `element`. Nothing happens if there is no such
    /// element.
    ///
    /// A node with two children takes the element of its in-order successor (the smallest element
    /// of its right subtree) and the successor's node is spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// tree.remove(&2);
    ///
    /// assert!(!tree.contains(&2));
    /// // 3 was the successor so it moved up to the root.
    /// assert_eq!(tree.levels().collect::<Vec<_>>(), [vec![&3], vec![&1]]);
    /// ```
    pub fn remove(&mut self, element: &T)
    where
        T: Ord,
    {
        self.root = remove(self.root.take(), element);
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> Node<T> {
    fn height(&self) -> usize {
        let left = self.left.as_deref().map_or(0, |n| n.height() + 1);
        let right = self.right.as_deref().map_or(0, |n| n.height() + 1);
        left.max(right)
    }
}

fn node_count<T>(link: &Link<T>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + node_count(&node.left) + node_count(&node.right),
    }
}

fn contains<T: Ord>(link: &Link<T>, element: &T) -> bool {
    match link {
        None => false,
        Some(node) => match element.cmp(&node.element) {
            Ordering::Less => contains(&node.left, element),
            Ordering::Equal => true,
            Ordering::Greater => contains(&node.right, element),
        },
    }
}

fn insert<T: Ord>(link: Link<T>, element: T) -> Link<T> {
    let Some(mut node) = link else {
        return Some(Node::new_boxed(element));
    };
    match element.cmp(&node.element) {
        Ordering::Less => node.left = insert(node.left.take(), element),
        Ordering::Equal => log::trace!("insert: element already present, ignoring"),
        Ordering::Greater => node.right = insert(node.right.take(), element),
    }

    Some(node)
}

fn remove<T: Ord>(link: Link<T>, element: &T) -> Link<T> {
    let Some(mut node) = link else {
        log::trace!("remove: element not found");
        return None;
    };
    match element.cmp(&node.element) {
        Ordering::Less => node.left = remove(node.left.take(), element),
        Ordering::Greater => node.right = remove(node.right.take(), element),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, only) | (only, None) => return only,
            (left, Some(right)) => {
                let (successor, rest) = take_min(right);
                node.element = successor;
                node.left = left;
                node.right = rest;
            }
        },
    }

    Some(node)
}

/// Detaches the smallest node of a subtree. Returns its element and whatever is left of the
/// subtree.
fn take_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { element, right, .. } = *node;
            (element, right)
        }
        Some(left) => {
            let (min, rest) = take_min(left);
            node.left = rest;
            (min, Some(node))
        }
    }
}
