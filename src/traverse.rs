//! Lazy traversals over a [`Tree`].
//!
//! Each traversal borrows the tree and keeps its own explicit stack (or queues, for
//! [`Levels`]), so it never touches the tree's links. Asking the tree for a traversal again
//! always starts over from the root.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::Tree;
//!
//! let tree: Tree<_> = [100, 50, 150, 40, 45].into_iter().collect();
//!
//! assert!(tree.pre_order().eq(&[100, 50, 40, 45, 150]));
//! assert!(tree.in_order().eq(&[40, 45, 50, 100, 150]));
//! assert!(tree.post_order().eq(&[45, 40, 50, 150, 100]));
//! assert_eq!(
//!     tree.levels().collect::<Vec<_>>(),
//!     [vec![&100], vec![&50, &150], vec![&40], vec![&45]],
//! );
//! ```

use std::collections::VecDeque;
use std::mem;

use crate::tree::{Node, Tree};

impl<T> Tree<T> {
    /// Visits each node before its left subtree and then its right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Visits the left subtree, then the node, then the right subtree. This yields the elements in
    /// ascending order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Visits both subtrees before the node itself.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self
                .root
                .as_deref()
                .map(|root| (root, false))
                .into_iter()
                .collect(),
        }
    }

    /// Alias for [`Tree::in_order`].
    pub fn iter(&self) -> InOrder<'_, T> {
        self.in_order()
    }

    /// Groups the elements by depth, yielding one `Vec` per level from the root down. Within a
    /// level elements appear left to right.
    pub fn levels(&self) -> Levels<'_, T> {
        Levels {
            current: self.root.as_deref().into_iter().collect(),
            next: VecDeque::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// Pre-order iterator returned by [`Tree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes first so left comes off the stack first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.element)
    }
}

/// In-order iterator returned by [`Tree::in_order`].
pub struct InOrder<'a, T> {
    /// The nodes whose left subtrees are being visited, innermost last.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.element)
    }
}

/// Post-order iterator returned by [`Tree::post_order`].
pub struct PostOrder<'a, T> {
    /// Each node is paired with whether its children have already been pushed.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.element);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }
}

/// Level-order iterator returned by [`Tree::levels`].
///
/// Two queues alternate: `current` is drained while the children of its nodes are queued onto
/// `next`, then the two swap.
pub struct Levels<'a, T> {
    current: VecDeque<&'a Node<T>>,
    next: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_empty() {
            return None;
        }

        let mut level = Vec::with_capacity(self.current.len());
        while let Some(node) = self.current.pop_front() {
            level.push(&node.element);
            self.next.extend(node.left.as_deref());
            self.next.extend(node.right.as_deref());
        }
        mem::swap(&mut self.current, &mut self.next);

        Some(level)
    }
}
