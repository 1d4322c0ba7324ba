//! Errors produced by [`Tree`][crate::Tree] operations.

/// Returned by [`Tree::find_min`][crate::Tree::find_min] and
/// [`Tree::find_max`][crate::Tree::find_max] when the tree holds no elements.
///
/// This is the only error a `Tree` reports. Inserting a duplicate, removing a missing element and
/// rotating around a missing node all leave the tree as it was instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{query} called on an empty tree")]
pub struct UnderflowError {
    query: &'static str,
}

impl UnderflowError {
    pub(crate) fn new(query: &'static str) -> Self {
        Self { query }
    }

    /// The name of the query that found the tree empty.
    pub fn query(&self) -> &'static str {
        self.query
    }
}
