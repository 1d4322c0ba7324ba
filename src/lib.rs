//! This crate exposes a plain, unbalanced Binary Search Tree (BST) along with a handful of
//! operations for inspecting and reshaping it, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an element and
//! may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an element takes `O(height)`. This tree does nothing to
//! keep its height down: inserting elements in sorted order builds a chain,
//! and every recursive operation then needs stack space proportional to the
//! number of elements. [`Tree::rotate_left`] and [`Tree::rotate_right`] are
//! available to reshape the tree by hand without disturbing its order.
//!
//! ## Beyond searching
//!
//! The [`Tree`] also supports comparing shapes ([`Tree::compare_structure`],
//! [`Tree::is_mirror`], [`Tree::is_full`]), producing new trees
//! ([`Tree::copy`], [`Tree::mirror`]), lazy traversals in pre-, in-, post-
//! and level order, and printing any of those traversals.
//!
//! ## Logging
//!
//! Operations that quietly do nothing (inserting a duplicate, removing a
//! missing element, rotating where no rotation is possible) emit records
//! through the [`log`] facade. Install a logger to see them.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod print;
mod rotate;
mod shape;
pub mod traverse;
mod tree;

pub use error::UnderflowError;
pub use tree::Tree;
